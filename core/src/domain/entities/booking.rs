//! Gym session and trainer session bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of gym session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Exercise,
    Cardio,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Exercise => "exercise",
            WorkoutType::Cardio => "cardio",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exercise" => Some(WorkoutType::Exercise),
            "cardio" => Some(WorkoutType::Cardio),
            _ => None,
        }
    }
}

/// Supported payment providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Khalti,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Khalti => "khalti",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "khalti" => Some(PaymentMethod::Khalti),
            _ => None,
        }
    }
}

/// Payment record attached to a gym booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub method: PaymentMethod,
    /// Reference issued by the payment provider, unique per booking
    pub transaction_id: String,
    /// Amount computed by the server, never taken from the client
    pub amount: f64,
}

/// A booked gym session
///
/// Immutable once stored. `user_id` is set only when the booking was made
/// by an authenticated caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymBooking {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub workout_type: WorkoutType,
    /// Hours
    pub duration: u32,
    pub session_date: DateTime<Utc>,
    pub payment: Payment,
    pub created_at: DateTime<Utc>,
}

impl GymBooking {
    pub fn new(
        user_id: Option<Uuid>,
        workout_type: WorkoutType,
        duration: u32,
        session_date: DateTime<Utc>,
        payment: Payment,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            workout_type,
            duration,
            session_date,
            payment,
            created_at: Utc::now(),
        }
    }

    /// Wire discriminator kept for clients that switch on it
    pub fn booking_type(&self) -> &'static str {
        "gym"
    }
}

/// Lifecycle of a trainer booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// Payment state of a trainer booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}

/// A booked session with a trainer
///
/// `trainer_name` and `trainer_rate` are copied from the trainer when the
/// booking is made, and `amount` is frozen at `trainer_rate * duration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub trainer_id: Uuid,
    pub trainer_name: String,
    pub trainer_rate: f64,
    /// Hours
    pub duration: u32,
    pub session_date: DateTime<Utc>,
    pub amount: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrainerBooking {
    /// Creates a pending booking priced from the trainer snapshot
    pub fn new(
        user_id: Uuid,
        trainer_id: Uuid,
        trainer_name: String,
        trainer_rate: f64,
        duration: u32,
        session_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            trainer_id,
            trainer_name,
            trainer_rate,
            duration,
            session_date,
            amount: trainer_rate * f64::from(duration),
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the booking cancelled; repeated calls are no-ops
    pub fn cancel(&mut self) {
        if self.status != BookingStatus::Cancelled {
            self.status = BookingStatus::Cancelled;
            self.updated_at = Utc::now();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}
