//! Route handlers grouped by resource
//!
//! - `user` - registration, signin, profile and account management
//! - `auth` - access token refresh
//! - `trainers` - trainer directory and trainer session bookings
//! - `bookings` - gym session bookings

pub mod auth;
pub mod bookings;
pub mod session;
pub mod trainers;
pub mod user;
