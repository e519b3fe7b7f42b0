use crate::error::AppError;
use crate::middlewares::AuthUser;
use crate::models::*;
use crate::services::TourService;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

fn require_admin(req: &HttpRequest) -> Result<(), AppError> {
    match req.extensions().get::<AuthUser>() {
        Some(user) if user.is_admin => Ok(()),
        Some(_) => Err(AppError::Forbidden),
        None => Err(AppError::AuthError("Missing access token".to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/tours",
    tag = "tour",
    request_body = TourCreateRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Tournée créée", body = TourResponse),
        (status = 403, description = "Réservé aux administrateurs")
    )
)]
pub async fn create_tour(
    service: web::Data<TourService>,
    req: HttpRequest,
    request: web::Json<TourCreateRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }

    match service.create_tour(request.into_inner()).await {
        Ok(tour) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": tour
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tours",
    tag = "tour",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tournées", body = [TourResponse]),
        (status = 401, description = "Non authentifié")
    )
)]
pub async fn get_tours(service: web::Data<TourService>) -> Result<HttpResponse> {
    match service.get_tours().await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn tour_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tours")
            .route("", web::post().to(create_tour))
            .route("", web::get().to(get_tours)),
    );
}
