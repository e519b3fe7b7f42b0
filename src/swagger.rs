use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::logout,
        handlers::tirage::create_tirage,
        handlers::tirage::get_all_tirages,
        handlers::tirage::get_tirages_by_event,
        handlers::tirage::get_winners_by_event,
        handlers::tirage::get_winners_by_tirage,
        handlers::participant::register_participant,
        handlers::participant::get_participants,
        handlers::participant::get_participants_by_event,
        handlers::participant::delete_participant,
        handlers::event::create_event,
        handlers::event::get_events,
        handlers::event::get_event,
        handlers::event::delete_event,
        handlers::tour::create_tour,
        handlers::tour::get_tours,
        handlers::user::create_user,
        handlers::user::get_users,
    ),
    components(
        schemas(
            LoginRequest,
            CreateUserRequest,
            UserResponse,
            AuthResponse,
            handlers::auth::RefreshRequest,
            TirageRequest,
            TirageResponse,
            TirageCreateResponse,
            TirageVainqueursResponse,
            VainqueurResponse,
            VainqueursResponse,
            TiragesResponse,
            TirageWithDetails,
            AllTiragesResponse,
            ParticipantCreateRequest,
            ParticipantResponse,
            EventCreateRequest,
            EventResponse,
            TourCreateRequest,
            TourResponse,
            PaginationInfo,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentification back-office"),
        (name = "tirage", description = "Tirage au sort et vainqueurs"),
        (name = "participant", description = "Inscriptions au jeu-concours"),
        (name = "event", description = "Dates de concert"),
        (name = "tour", description = "Tournées"),
        (name = "user", description = "Comptes back-office"),
    ),
    info(
        title = "Adrenaline Backend API",
        version = "1.0.0",
        description = "API REST du site de promotion de la tournée Adrenaline"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
