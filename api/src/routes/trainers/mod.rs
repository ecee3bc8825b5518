//! Trainer route handlers
//!
//! - `directory` - public listing and lookup
//! - `manage` - administrative create, update and delete
//! - `booking` - booking and cancelling trainer sessions

pub mod booking;
pub mod directory;
pub mod manage;
