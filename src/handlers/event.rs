use crate::error::AppError;
use crate::middlewares::AuthUser;
use crate::models::*;
use crate::services::EventService;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

fn require_admin(req: &HttpRequest) -> Result<(), AppError> {
    match req.extensions().get::<AuthUser>() {
        Some(user) if user.is_admin => Ok(()),
        Some(_) => Err(AppError::Forbidden),
        None => Err(AppError::AuthError("Missing access token".to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/events",
    tag = "event",
    request_body = EventCreateRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Événement créé", body = EventResponse),
        (status = 404, description = "Aucune tournée en base"),
        (status = 403, description = "Réservé aux administrateurs")
    )
)]
pub async fn create_event(
    service: web::Data<EventService>,
    req: HttpRequest,
    request: web::Json<EventCreateRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }

    match service.create_event(request.into_inner()).await {
        Ok(event) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": event,
            "message": "success"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/events",
    tag = "event",
    params(
        ("page" = Option<u32>, Query, description = "Page (défaut 1)"),
        ("per_page" = Option<u32>, Query, description = "Taille de page (défaut 20)"),
        ("search" = Option<String>, Query, description = "Recherche ville/salle")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Événements paginés"),
        (status = 401, description = "Non authentifié")
    )
)]
pub async fn get_events(
    service: web::Data<EventService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match service.get_events(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "event",
    params(
        ("id" = Uuid, Path, description = "Identifiant de l'event")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Détail de l'event", body = EventResponse),
        (status = 404, description = "Événement non trouvé")
    )
)]
pub async fn get_event(
    service: web::Data<EventService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match service.get_event(path.into_inner()).await {
        Ok(event) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": event }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "event",
    params(
        ("id" = Uuid, Path, description = "Identifiant de l'event")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Événement supprimé"),
        (status = 403, description = "Réservé aux administrateurs"),
        (status = 404, description = "Événement non trouvé")
    )
)]
pub async fn delete_event(
    service: web::Data<EventService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }

    match service.delete_event(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Événement supprimé"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn event_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events")
            .route("", web::post().to(create_event))
            .route("", web::get().to(get_events))
            .route("/{id}", web::get().to(get_event))
            .route("/{id}", web::delete().to(delete_event)),
    );
}
