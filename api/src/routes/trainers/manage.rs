//! Administrative trainer management
//!
//! Every handler here sits behind the admin key guard.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::dto::{
    CreateTrainerRequest, MessageResponse, TrainerResponse, TrainersDeletedResponse,
    UpdateTrainerRequest,
};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/trainers
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Maya Gurung",
///     "email": "maya@gym.com",
///     "specialization": "Weight Training",
///     "experience": 5,
///     "rate": 800,
///     "availability": { "days": ["Mon", "Wed"], "hours": { "start": "06:00", "end": "12:00" } },
///     "bio": "Strength coach"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid fields
/// - 403 Forbidden: Missing or wrong admin key
/// - 409 Conflict: Trainer email already registered
pub async fn create<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    request: web::Json<CreateTrainerRequest>,
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

    match state.trainer_service.create(request.into()).await {
        Ok(trainer) => HttpResponse::Created().json(TrainerResponse {
            message: "Trainer created successfully".to_string(),
            trainer,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/trainers/{id}
///
/// Partial update; existing bookings keep the rate they were priced at.
pub async fn update<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTrainerRequest>,
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

    match state
        .trainer_service
        .update(path.into_inner(), request.into())
        .await
    {
        Ok(trainer) => HttpResponse::Ok().json(TrainerResponse {
            message: "Trainer updated successfully".to_string(),
            trainer,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/trainers/{id}
pub async fn delete<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state.trainer_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Trainer deleted successfully")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/trainers
pub async fn delete_all<U, T, G, B>(state: web::Data<AppState<U, T, G, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state.trainer_service.delete_all().await {
        Ok(deleted) => HttpResponse::Ok().json(TrainersDeletedResponse {
            message: "All trainers deleted successfully".to_string(),
            deleted,
        }),
        Err(error) => handle_domain_error(error),
    }
}
