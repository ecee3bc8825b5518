//! Token service module for JWT management
//!
//! Issues and verifies the signed access and refresh tokens that carry a
//! member's identity. Nothing is persisted: a token is valid until it expires.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
