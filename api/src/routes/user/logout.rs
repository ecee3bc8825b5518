use actix_web::{web, HttpResponse};

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::MessageResponse;
use crate::routes::session::cleared_cookies;

/// Handler for POST /api/user/logout
///
/// Clears both session cookies. Tokens are not revoked server-side and stay
/// valid until they expire.
pub async fn logout<U, T, G, B>(state: web::Data<AppState<U, T, G, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    let (access, refresh) = cleared_cookies(&state.session);
    HttpResponse::Ok()
        .cookie(access)
        .cookie(refresh)
        .json(MessageResponse::new("Logged out successfully"))
}
