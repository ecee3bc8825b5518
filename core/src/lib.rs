//! # GymFlow Core
//!
//! Core business logic and domain layer for the GymFlow backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::*;
pub use domain::value_objects::*;
pub use errors::{
    AuthError, DomainError, DomainResult, ErrorCategory, TokenError, ValidationError,
};
pub use repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, BookingService, BookingServiceConfig, Credentials,
    GymBookingRequest, NewUser, PasswordHasher, TokenService, TokenServiceConfig,
    TrainerBookingRequest, TrainerService, TransactionService,
};

#[cfg(any(test, feature = "testing"))]
pub use repositories::{
    MockGymBookingRepository, MockTrainerBookingRepository, MockTrainerRepository,
    MockUserRepository,
};
