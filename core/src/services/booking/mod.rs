//! Booking service module
//!
//! Prices and stores gym sessions and trainer sessions, and cancels trainer
//! sessions on behalf of their owner. Every write is bounded by the
//! configured save timeout.

mod config;
mod service;
mod types;


pub use config::BookingServiceConfig;
pub use service::BookingService;
pub use types::{GymBookingRequest, TrainerBookingRequest};
