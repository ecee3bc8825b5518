//! Authentication route handlers
//!
//! Signup and signin live with the account endpoints; this scope only
//! renews sessions, so the refresh cookie is never sent anywhere else.

pub mod refresh;
