//! Shared utilities and common types for the GymFlow server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint
//! - Validation helpers for names, phone numbers, emails and session dates

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, BookingConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    ServerConfig, SessionConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::{date, phone, validation};
