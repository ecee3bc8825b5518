use actix_web::{web, HttpResponse};
use uuid::Uuid;

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/trainers
pub async fn list<U, T, G, B>(state: web::Data<AppState<U, T, G, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state.trainer_service.list().await {
        Ok(trainers) => HttpResponse::Ok().json(trainers),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/trainers/{id}
pub async fn get<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state.trainer_service.get(path.into_inner()).await {
        Ok(trainer) => HttpResponse::Ok().json(trainer),
        Err(error) => handle_domain_error(error),
    }
}
