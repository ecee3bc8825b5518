pub mod admin;
pub mod auth;
pub mod cors;

pub use admin::*;
pub use auth::*;
pub use cors::*;
