use actix_web::{web, HttpRequest, HttpResponse};

use gym_core::errors::TokenError;
use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::{RefreshTokenRequest, SessionResponse};
use crate::handlers::handle_domain_error;
use crate::routes::session::session_cookies;

/// Handler for POST /api/auth/refresh-token
///
/// Issues a new token pair from a valid refresh token.
///
/// The refresh token is read from the `refreshToken` cookie, or from the
/// request body when the cookie is absent:
///
/// ```json
/// {
///     "refreshToken": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// Same shape as signin, with message "Token refreshed successfully". Both
/// cookies are replaced.
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid or expired refresh token, or the
///   account no longer exists
pub async fn refresh_token<U, T, G, B>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, G, B>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    let from_cookie = req
        .cookie(&state.session.refresh_cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|t| !t.trim().is_empty());
    let from_body = body
        .and_then(|body| body.into_inner().refresh_token)
        .filter(|t| !t.trim().is_empty());

    let token = match from_cookie.or(from_body) {
        Some(token) => token,
        None => return handle_domain_error(TokenError::MissingToken.into()),
    };

    match state.auth_service.refresh(token.trim()).await {
        Ok(auth_response) => {
            let (access, refresh) = session_cookies(&state.session, &auth_response.tokens);
            HttpResponse::Ok()
                .cookie(access)
                .cookie(refresh)
                .json(SessionResponse::new("Token refreshed successfully", auth_response))
        }
        Err(error) => handle_domain_error(error),
    }
}
