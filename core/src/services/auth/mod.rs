//! Authentication service module
//!
//! Handles the member account lifecycle:
//! - Signup with uniqueness checks on email and phone
//! - Signin with generic failures for unknown email or wrong password
//! - Token refresh, profile reads and self-service edits
//! - Self-service account deletion

mod config;
mod service;
mod types;


pub use config::AuthServiceConfig;
pub use service::AuthService;
pub use types::{Credentials, NewUser};
