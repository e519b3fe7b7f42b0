use crate::error::AppError;
use crate::middlewares::AuthUser;
use crate::models::*;
use crate::services::UserService;
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
    path = "/users",
    tag = "user",
    request_body = CreateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Compte créé", body = UserResponse),
        (status = 400, description = "Email ou mot de passe invalide"),
        (status = 403, description = "Réservé aux administrateurs")
    )
)]
pub async fn create_user(
    service: web::Data<UserService>,
    req: HttpRequest,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }

    match service.create_user(request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": user
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "user",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Comptes back-office", body = [UserResponse]),
        (status = 403, description = "Réservé aux administrateurs")
    )
)]
pub async fn get_users(service: web::Data<UserService>, req: HttpRequest) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }

    match service.get_users().await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(get_users)),
    );
}
