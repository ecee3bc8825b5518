use actix_web::{web, HttpResponse};

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

/// Handler for GET /api/user/transactions
///
/// Gym and trainer bookings of the caller, newest first. Amounts and
/// trainer names are the ones recorded when each booking was made.
pub async fn transactions<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state.transaction_service.list_for_user(auth.user_id).await {
        Ok(transactions) => HttpResponse::Ok().json(transactions),
        Err(error) => handle_domain_error(error),
    }
}
