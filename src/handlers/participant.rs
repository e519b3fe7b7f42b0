use crate::error::AppError;
use crate::middlewares::AuthUser;
use crate::models::*;
use crate::services::ParticipantService;
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
    path = "/participants",
    tag = "participant",
    request_body = ParticipantCreateRequest,
    responses(
        (status = 201, description = "Participant inscrit", body = ParticipantResponse),
        (status = 400, description = "Champs manquants ou invalides"),
        (status = 404, description = "Événement non trouvé")
    )
)]
/// Inscription publique au jeu-concours d'un event
pub async fn register_participant(
    service: web::Data<ParticipantService>,
    request: web::Json<ParticipantCreateRequest>,
) -> Result<HttpResponse> {
    match service.create_participant(request.into_inner()).await {
        Ok(participant) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": participant,
            "message": "success"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/participants_bo",
    tag = "participant",
    params(
        ("page" = Option<u32>, Query, description = "Page (défaut 1)"),
        ("per_page" = Option<u32>, Query, description = "Taille de page (défaut 20)"),
        ("search" = Option<String>, Query, description = "Recherche nom/prenom/email")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Participants paginés"),
        (status = 401, description = "Non authentifié")
    )
)]
pub async fn get_participants(
    service: web::Data<ParticipantService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match service.get_participants(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/participants_bo/event/{id}",
    tag = "participant",
    params(
        ("id" = Uuid, Path, description = "Identifiant de l'event")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Participants de l'event"),
        (status = 401, description = "Non authentifié")
    )
)]
pub async fn get_participants_by_event(
    service: web::Data<ParticipantService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match service.get_participants_by_event(path.into_inner()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/participants_bo/{id}",
    tag = "participant",
    params(
        ("id" = Uuid, Path, description = "Identifiant du participant")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Participant supprimé"),
        (status = 403, description = "Réservé aux administrateurs"),
        (status = 404, description = "Participant non trouvé")
    )
)]
pub async fn delete_participant(
    service: web::Data<ParticipantService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }

    match service.delete_participant(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Participant supprimé"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn participant_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/participants", web::post().to(register_participant));
    cfg.service(
        web::scope("/participants_bo")
            .route("", web::get().to(get_participants))
            .route("/event/{id}", web::get().to(get_participants_by_event))
            .route("/{id}", web::delete().to(delete_participant)),
    );
}
