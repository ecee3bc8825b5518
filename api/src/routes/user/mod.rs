//! Member account route handlers
//!
//! This module contains the account endpoints under `/api/user`:
//! - Registration and signin
//! - Logout
//! - Profile, phone number, password and account deletion
//! - Transaction history
//! - Administrative member listing

pub mod admin;
pub mod logout;
pub mod profile;
pub mod signin;
pub mod signup;
pub mod transactions;
