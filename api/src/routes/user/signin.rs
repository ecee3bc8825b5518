use actix_web::{web, HttpResponse};
use validator::Validate;

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::{SessionResponse, SigninRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::session::session_cookies;

/// Handler for POST /api/user/signin
///
/// Authenticates with email and password. An unknown email and a wrong
/// password produce the same 401 `INVALID_CREDENTIALS` response.
pub async fn signin<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    request: web::Json<SigninRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.signin(request.into()).await {
        Ok(auth_response) => {
            let (access, refresh) = session_cookies(&state.session, &auth_response.tokens);
            HttpResponse::Ok()
                .cookie(access)
                .cookie(refresh)
                .json(SessionResponse::new("Login successful", auth_response))
        }
        Err(error) => handle_domain_error(error),
    }
}
