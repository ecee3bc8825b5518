//! HTTP surface of the GymFlow backend
//!
//! Exposed as a library so integration tests can build the application with
//! in-memory repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
