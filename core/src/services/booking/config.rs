//! Configuration for the booking service

use std::time::Duration;

use gym_shared::config::BookingConfig;

/// Pricing and persistence limits for bookings
#[derive(Debug, Clone)]
pub struct BookingServiceConfig {
    /// Hourly price of a cardio gym session
    pub cardio_rate: f64,
    /// Hourly price of an exercise gym session
    pub exercise_rate: f64,
    /// Longest bookable trainer session, in hours
    pub max_trainer_hours: u32,
    /// Upper bound on a single save
    pub save_timeout: Duration,
}

impl Default for BookingServiceConfig {
    fn default() -> Self {
        Self::from(&BookingConfig::default())
    }
}

impl From<&BookingConfig> for BookingServiceConfig {
    fn from(config: &BookingConfig) -> Self {
        Self {
            cardio_rate: config.cardio_rate as f64,
            exercise_rate: config.exercise_rate as f64,
            max_trainer_hours: config.max_trainer_hours,
            save_timeout: Duration::from_secs(config.save_timeout_secs),
        }
    }
}
