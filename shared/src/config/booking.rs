//! Booking pricing and persistence settings

use serde::{Deserialize, Serialize};

/// Booking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Hourly price of a cardio gym session
    pub cardio_rate: i64,

    /// Hourly price of an exercise gym session
    pub exercise_rate: i64,

    /// Longest trainer session that can be booked, in hours
    pub max_trainer_hours: u32,

    /// Upper bound on a single booking save, in seconds
    pub save_timeout_secs: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            cardio_rate: 250,
            exercise_rate: 100,
            max_trainer_hours: 8,
            save_timeout_secs: 5,
        }
    }
}

impl BookingConfig {
    /// Create from environment variables
    ///
    /// Only the save timeout is tunable; prices are part of the product.
    pub fn from_env() -> Self {
        let save_timeout_secs = std::env::var("BOOKING_SAVE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(5);

        Self {
            save_timeout_secs,
            ..Default::default()
        }
    }

    /// Set the save timeout
    pub fn with_save_timeout_secs(mut self, secs: u64) -> Self {
        self.save_timeout_secs = secs;
        self
    }
}
