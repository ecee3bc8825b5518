//! CORS middleware configuration for cross-origin requests.
//!
//! The single-page frontend is served from a different origin than the API
//! and sends the session cookie, so credentials are always supported.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use gym_shared::config::CorsConfig;

use super::admin::ADMIN_KEY_HEADER;

/// Creates a CORS middleware instance from the configured origins.
///
/// With no configured origins (development) the request origin is echoed
/// back. Otherwise only the listed origins are accepted.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static(ADMIN_KEY_HEADER),
        ])
        .max_age(config.max_age)
        .supports_credentials();

    if config.allows_any_origin() {
        log::info!("Configuring CORS to accept any origin");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| {
            log::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}
