use actix_web::{web, HttpResponse};
use validator::Validate;

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::{BookGymRequest, BookingResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::OptionalAuth;

/// Handler for POST /api/bookings/gym
///
/// Records a gym session paid through the payment provider. Authentication
/// is optional; a signed-in caller becomes the booking's owner.
///
/// # Request Body
///
/// ```json
/// {
///     "workoutType": "cardio",
///     "duration": 3,
///     "sessionDate": "2030-01-15",
///     "payment": { "method": "khalti", "transactionId": "txn-42" }
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// `{ "message": "Booking successful", "booking": { ... } }` with the amount
/// computed server-side in `booking.payment.amount`.
///
/// ## Errors
/// - 400 Bad Request: Unknown workout type or payment method, bad duration or date
/// - 409 Conflict: The transaction id was already used for a booking
pub async fn book_gym<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    auth: OptionalAuth,
    request: web::Json<BookGymRequest>,
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

    let owner = auth.0.map(|context| context.user_id);
    match state.booking_service.book_gym_session(owner, request.into()).await {
        Ok(booking) => {
            HttpResponse::Created().json(BookingResponse::new("Booking successful", booking))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/bookings/gym (administrative)
pub async fn list_gym<U, T, G, B>(state: web::Data<AppState<U, T, G, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state.booking_service.list_gym_bookings().await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(error) => handle_domain_error(error),
    }
}
