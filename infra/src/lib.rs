//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the GymFlow backend,
//! following Clean Architecture principles. It provides the MySQL
//! implementations of the repository traits declared in `gym_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: connection pool management and migrations
//! - **Repositories**: users, trainers, gym bookings and trainer bookings
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use gym_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
