use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // pour le formateur env_logger

use adrenaline_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // Chargement de la configuration
    let config = Config::from_toml().expect("Failed to load configuration file");

    // Pool de connexions
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // Migrations
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // Service JWT
    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    // Services métier
    let auth_service = AuthService::new(pool.clone(), jwt_service.clone());
    let user_service = UserService::new(pool.clone());
    let tour_service = TourService::new(pool.clone());
    let event_service = EventService::new(pool.clone());
    let participant_service = ParticipantService::new(pool.clone());
    let tirage_service = TirageService::new(pool.clone());

    // Compte admin par défaut pour le premier démarrage
    auth_service
        .ensure_default_admin(&config.admin)
        .await
        .expect("Failed to ensure default admin account");

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(tour_service.clone()))
            .app_data(web::Data::new(event_service.clone()))
            .app_data(web::Data::new(participant_service.clone()))
            .app_data(web::Data::new(tirage_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::tirage_config)
                    .configure(handlers::event_config)
                    .configure(handlers::participant_config)
                    .configure(handlers::tour_config)
                    .configure(handlers::user_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
