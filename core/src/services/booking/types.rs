//! Inputs accepted by the booking service
//!
//! Fields arrive as the client sent them; the service parses and validates.

/// A gym session paid through the external payment provider
#[derive(Debug, Clone)]
pub struct GymBookingRequest {
    /// `exercise` or `cardio`
    pub workout_type: String,
    /// Hours
    pub duration: i64,
    pub session_date: String,
    /// `khalti`
    pub payment_method: String,
    /// Reference issued by the payment provider
    pub transaction_id: String,
}

/// A session with a specific trainer
#[derive(Debug, Clone)]
pub struct TrainerBookingRequest {
    /// Hours
    pub duration: i64,
    pub session_date: String,
}
