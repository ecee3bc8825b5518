use gym_core::domain::entities::trainer::{
    Availability, NewTrainer, Specialization, Trainer, TrainerUpdate,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainerRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Email is required"))]
    pub email: String,

    pub specialization: Specialization,

    /// Years of experience
    pub experience: u32,

    /// Hourly rate
    #[validate(range(min = 0.0, message = "Rate cannot be negative"))]
    pub rate: f64,

    pub availability: Availability,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,

    #[serde(default)]
    #[validate(length(max = 500, message = "Bio cannot exceed 500 characters"))]
    pub bio: Option<String>,
}

impl From<CreateTrainerRequest> for NewTrainer {
    fn from(request: CreateTrainerRequest) -> Self {
        NewTrainer {
            name: request.name,
            email: request.email,
            specialization: request.specialization,
            experience: request.experience,
            rate: request.rate,
            availability: request.availability,
            rating: request.rating,
            bio: request.bio,
        }
    }
}

/// Partial trainer edit; absent fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainerRequest {
    #[validate(length(min = 1, max = 100, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Email cannot be empty"))]
    pub email: Option<String>,

    pub specialization: Option<Specialization>,

    pub experience: Option<u32>,

    #[validate(range(min = 0.0, message = "Rate cannot be negative"))]
    pub rate: Option<f64>,

    pub availability: Option<Availability>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,

    #[validate(length(max = 500, message = "Bio cannot exceed 500 characters"))]
    pub bio: Option<String>,
}

impl From<UpdateTrainerRequest> for TrainerUpdate {
    fn from(request: UpdateTrainerRequest) -> Self {
        TrainerUpdate {
            name: request.name,
            email: request.email,
            specialization: request.specialization,
            experience: request.experience,
            rate: request.rate,
            availability: request.availability,
            rating: request.rating,
            bio: request.bio,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerResponse {
    pub message: String,
    pub trainer: Trainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainersDeletedResponse {
    pub message: String,
    pub deleted: u64,
}
