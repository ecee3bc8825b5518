//! Business services containing domain logic and use cases.

pub mod auth;
pub mod booking;
pub mod password;
pub mod token;
pub mod trainer;
pub mod transaction;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, Credentials, NewUser};
pub use booking::{BookingService, BookingServiceConfig, GymBookingRequest, TrainerBookingRequest};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
pub use trainer::TrainerService;
pub use transaction::TransactionService;
