//! Session cookies set alongside the tokens returned in response bodies

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use gym_core::domain::entities::token::TokenPair;
use gym_shared::config::SessionConfig;

/// Access and refresh cookies for a freshly issued token pair
pub fn session_cookies(
    session: &SessionConfig,
    tokens: &TokenPair,
) -> (Cookie<'static>, Cookie<'static>) {
    (
        build_cookie(
            session,
            session.cookie_name.clone(),
            tokens.access_token.clone(),
            "/",
            tokens.expires_in,
        ),
        build_cookie(
            session,
            session.refresh_cookie_name.clone(),
            tokens.refresh_token.clone(),
            &session.refresh_cookie_path,
            tokens.refresh_expires_in,
        ),
    )
}

/// Expired, empty cookies that make the browser drop the session
pub fn cleared_cookies(session: &SessionConfig) -> (Cookie<'static>, Cookie<'static>) {
    (
        build_cookie(session, session.cookie_name.clone(), String::new(), "/", 0),
        build_cookie(
            session,
            session.refresh_cookie_name.clone(),
            String::new(),
            &session.refresh_cookie_path,
            0,
        ),
    )
}

fn build_cookie(
    session: &SessionConfig,
    name: String,
    value: String,
    path: &str,
    max_age_seconds: i64,
) -> Cookie<'static> {
    Cookie::build(name, value)
        .path(path.to_string())
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(session.secure)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}
