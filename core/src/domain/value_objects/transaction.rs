//! Unified payment history entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::booking::{GymBooking, TrainerBooking};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Gym,
    Trainer,
}

/// One line of a member's transaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: f64,
    pub status: String,
    pub payment_status: String,
    pub session_date: DateTime<Utc>,
    /// When the booking was made
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_name: Option<String>,
}

impl From<&GymBooking> for Transaction {
    fn from(booking: &GymBooking) -> Self {
        Self {
            id: booking.id,
            kind: TransactionKind::Gym,
            description: format!(
                "{}h {} Session",
                booking.duration,
                booking.workout_type.as_str()
            ),
            amount: booking.payment.amount,
            // Gym bookings are paid up front through the provider
            status: "confirmed".to_string(),
            payment_status: "completed".to_string(),
            session_date: booking.session_date,
            date: booking.created_at,
            trainer_name: None,
        }
    }
}

impl From<&TrainerBooking> for Transaction {
    fn from(booking: &TrainerBooking) -> Self {
        Self {
            id: booking.id,
            kind: TransactionKind::Trainer,
            description: format!("Training with {}", booking.trainer_name),
            amount: booking.amount,
            status: booking.status.as_str().to_string(),
            payment_status: booking.payment_status.as_str().to_string(),
            session_date: booking.session_date,
            date: booking.created_at,
            trainer_name: Some(booking.trainer_name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::booking::{Payment, PaymentMethod, WorkoutType};

    #[test]
    fn test_gym_description() {
        let booking = GymBooking::new(
            None,
            WorkoutType::Cardio,
            3,
            Utc::now(),
            Payment {
                method: PaymentMethod::Khalti,
                transaction_id: "t".to_string(),
                amount: 750.0,
            },
        );
        let tx = Transaction::from(&booking);
        assert_eq!(tx.description, "3h cardio Session");
        assert_eq!(tx.amount, 750.0);
        assert_eq!(tx.kind, TransactionKind::Gym);
    }

    #[test]
    fn test_trainer_description_uses_snapshot() {
        let booking = TrainerBooking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Maya Gurung".to_string(),
            500.0,
            2,
            Utc::now(),
        );
        let tx = Transaction::from(&booking);
        assert_eq!(tx.description, "Training with Maya Gurung");
        assert_eq!(tx.status, "pending");
        assert_eq!(tx.amount, 1000.0);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "trainer");
        assert_eq!(json["trainerName"], "Maya Gurung");
    }
}
