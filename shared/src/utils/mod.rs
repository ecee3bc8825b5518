//! Common utility functions

pub mod date;
pub mod phone;
pub mod validation;

// Re-export commonly used utilities
pub use date::parse_session_date;
pub use phone::{is_valid_phone, mask_phone_number, normalize_phone_number};
pub use validation::validators;
