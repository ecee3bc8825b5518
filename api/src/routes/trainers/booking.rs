use actix_web::{web, HttpResponse};
use uuid::Uuid;

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::{BookTrainerRequest, BookingResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

/// Handler for POST /api/trainers/{id}/book
///
/// # Request Body
///
/// ```json
/// {
///     "duration": 2,
///     "sessionDate": "2030-01-15T09:00:00Z"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "Booking created successfully",
///     "booking": {
///         "id": "...",
///         "trainer": { "name": "Maya Gurung", "rate": 800.0 },
///         "user": { "name": "Asha Rai", "email": "asha@example.com" },
///         "duration": 2,
///         "sessionDate": "2030-01-15T09:00:00Z",
///         "amount": 1600.0,
///         "status": "pending",
///         "paymentStatus": "pending",
///         "createdAt": "..."
///     }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Duration missing or outside 1-8 hours, or a missing, invalid or past date
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: No such trainer, checked before the body
pub async fn book<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<BookTrainerRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state
        .booking_service
        .book_trainer_session(path.into_inner(), auth.user_id, request.into_inner().into())
        .await
    {
        Ok(booking) => HttpResponse::Created()
            .json(BookingResponse::new("Booking created successfully", booking)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PATCH /api/trainers/bookings/{id}/cancel
///
/// Someone else's booking is answered with 404, exactly like a missing one.
pub async fn cancel<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state
        .booking_service
        .cancel_trainer_booking(path.into_inner(), auth.user_id)
        .await
    {
        Ok(booking) => {
            HttpResponse::Ok().json(BookingResponse::new("Booking cancelled successfully", booking))
        }
        Err(error) => handle_domain_error(error),
    }
}
