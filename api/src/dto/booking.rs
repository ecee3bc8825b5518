use gym_core::services::{GymBookingRequest, TrainerBookingRequest};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of a trainer booking
///
/// Both fields are taken as sent; the booking service checks them only after
/// the trainer lookup, so an unknown trainer wins over a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTrainerRequest {
    /// Whole hours, 1 to 8
    #[serde(default)]
    pub duration: Option<serde_json::Value>,

    #[serde(default)]
    pub session_date: Option<String>,
}

impl From<BookTrainerRequest> for TrainerBookingRequest {
    fn from(request: BookTrainerRequest) -> Self {
        TrainerBookingRequest {
            // Missing or non-integer durations fall outside the accepted range
            duration: request
                .duration
                .as_ref()
                .and_then(serde_json::Value::as_i64)
                .unwrap_or(0),
            session_date: request.session_date.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(length(min = 1, message = "Payment method is required"))]
    pub method: String,

    #[validate(length(min = 1, message = "Transaction id is required"))]
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookGymRequest {
    #[validate(length(min = 1, message = "Workout type is required"))]
    pub workout_type: String,

    /// Hours
    pub duration: i64,

    #[validate(length(min = 1, message = "Session date is required"))]
    pub session_date: String,

    #[validate(nested)]
    pub payment: PaymentRequest,
}

impl From<BookGymRequest> for GymBookingRequest {
    fn from(request: BookGymRequest) -> Self {
        GymBookingRequest {
            workout_type: request.workout_type,
            duration: request.duration,
            session_date: request.session_date,
            payment_method: request.payment.method,
            transaction_id: request.payment.transaction_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse<T> {
    pub message: String,
    pub booking: T,
}

impl<T> BookingResponse<T> {
    pub fn new(message: impl Into<String>, booking: T) -> Self {
        Self {
            message: message.into(),
            booking,
        }
    }
}
