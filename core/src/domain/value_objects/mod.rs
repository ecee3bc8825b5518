//! Value objects assembled by services for the presentation layer.

pub mod auth_response;
pub mod booking_view;
pub mod transaction;

pub use auth_response::AuthResponse;
pub use booking_view::{BookedTrainer, BookingCustomer, TrainerBookingView};
pub use transaction::{Transaction, TransactionKind};
