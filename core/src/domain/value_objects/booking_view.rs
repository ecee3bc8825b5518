//! Trainer booking as returned to the caller who made it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::booking::{BookingStatus, PaymentStatus, TrainerBooking};
use crate::domain::entities::user::User;

/// Trainer details embedded in a booking response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedTrainer {
    pub name: String,
    pub rate: f64,
}

/// Customer details embedded in a booking response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCustomer {
    pub name: String,
    pub email: String,
}

/// Booking enriched with trainer and customer details
///
/// Internal trainer and user identifiers are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerBookingView {
    pub id: Uuid,
    pub trainer: BookedTrainer,
    pub user: BookingCustomer,
    pub duration: u32,
    pub session_date: DateTime<Utc>,
    pub amount: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl TrainerBookingView {
    pub fn new(booking: &TrainerBooking, customer: &User) -> Self {
        Self {
            id: booking.id,
            trainer: BookedTrainer {
                name: booking.trainer_name.clone(),
                rate: booking.trainer_rate,
            },
            user: BookingCustomer {
                name: customer.name.clone(),
                email: customer.email.clone(),
            },
            duration: booking.duration,
            session_date: booking.session_date,
            amount: booking.amount,
            status: booking.status,
            payment_status: booking.payment_status,
            created_at: booking.created_at,
        }
    }
}
