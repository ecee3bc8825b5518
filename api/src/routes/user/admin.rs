use actix_web::{web, HttpResponse};

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/user/all (administrative)
///
/// Password hashes are never serialized.
pub async fn list_users<U, T, G, B>(state: web::Data<AppState<U, T, G, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state.auth_service.list_users().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(error) => handle_domain_error(error),
    }
}
