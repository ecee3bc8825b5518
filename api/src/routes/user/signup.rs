use actix_web::{web, HttpResponse};
use validator::Validate;

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::{SessionResponse, SignupRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::session::session_cookies;

/// Handler for POST /api/user/signup
///
/// Registers a member and opens a session.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Asha Rai",
///     "email": "asha@example.com",
///     "phoneNumber": "9876543210",
///     "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "Registration successful",
///     "user": { "id": "...", "name": "Asha Rai", "email": "asha@example.com" },
///     "token": "eyJ...",
///     "refreshToken": "eyJ..."
/// }
/// ```
/// The `token` and `refreshToken` cookies are set as well.
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid fields
/// - 409 Conflict: Email or phone number already registered
pub async fn signup<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    request: web::Json<SignupRequest>,
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

    match state.auth_service.signup(request.into()).await {
        Ok(auth_response) => {
            let (access, refresh) = session_cookies(&state.session, &auth_response.tokens);
            HttpResponse::Created()
                .cookie(access)
                .cookie(refresh)
                .json(SessionResponse::new("Registration successful", auth_response))
        }
        Err(error) => handle_domain_error(error),
    }
}
