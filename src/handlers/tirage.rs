use crate::error::AppError;
use crate::middlewares::AuthUser;
use crate::models::*;
use crate::services::TirageService;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

/// Le lancement d'un tirage est réservé aux administrateurs
fn require_admin(req: &HttpRequest) -> Result<(), AppError> {
    match req.extensions().get::<AuthUser>() {
        Some(user) if user.is_admin => Ok(()),
        Some(_) => Err(AppError::Forbidden),
        None => Err(AppError::AuthError("Missing access token".to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/tirage",
    tag = "tirage",
    request_body = TirageRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Tirage effectué", body = TirageCreateResponse),
        (status = 400, description = "Nombre de vainqueurs invalide"),
        (status = 404, description = "Événement ou participants introuvables"),
        (status = 403, description = "Réservé aux administrateurs")
    )
)]
/// Effectue (ou rejoue) le tirage au sort d'un event.
/// Un nouvel appel pour le même event remplace intégralement le résultat
/// précédent.
pub async fn create_tirage(
    service: web::Data<TirageService>,
    req: HttpRequest,
    request: web::Json<TirageRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }

    match service.faire_tirage(request.into_inner()).await {
        Ok(outcome) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": TirageCreateResponse {
                message: outcome.message,
                code: 201,
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tirage",
    tag = "tirage",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Listing complet des tirages", body = AllTiragesResponse),
        (status = 401, description = "Non authentifié")
    )
)]
/// Listing d'audit: tous les tirages avec leur event et leurs vainqueurs
pub async fn get_all_tirages(service: web::Data<TirageService>) -> Result<HttpResponse> {
    match service.get_all_tirages_with_winners().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tirage/event/{id}",
    tag = "tirage",
    params(
        ("id" = Uuid, Path, description = "Identifiant de l'event")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tirages de l'event", body = TiragesResponse),
        (status = 404, description = "Aucun tirage pour cet event")
    )
)]
pub async fn get_tirages_by_event(
    service: web::Data<TirageService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match service.get_tirages_by_event(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/vainqueurs/event/{id}",
    tag = "tirage",
    params(
        ("id" = Uuid, Path, description = "Identifiant de l'event")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tirage et vainqueurs de l'event", body = TirageVainqueursResponse),
        (status = 404, description = "Aucun tirage pour cet event")
    )
)]
/// Résout le tirage de l'event puis renvoie ses vainqueurs ordonnés par rang
pub async fn get_winners_by_event(
    service: web::Data<TirageService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match service.get_winners_by_event(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/vainqueurs/tirage/{id}",
    tag = "tirage",
    params(
        ("id" = Uuid, Path, description = "Identifiant du tirage")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Vainqueurs du tirage", body = VainqueursResponse),
        (status = 404, description = "Aucun vainqueur pour ce tirage")
    )
)]
pub async fn get_winners_by_tirage(
    service: web::Data<TirageService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match service.get_winners_by_tirage(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Routes du sous-système de tirage
pub fn tirage_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tirage")
            .route("", web::post().to(create_tirage))
            .route("", web::get().to(get_all_tirages))
            .route("/event/{id}", web::get().to(get_tirages_by_event)),
    );
    cfg.service(
        web::scope("/vainqueurs")
            .route("/event/{id}", web::get().to(get_winners_by_event))
            .route("/tirage/{id}", web::get().to(get_winners_by_tirage)),
    );
}
