use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _req_head| {
            // À restreindre en production
            true
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
