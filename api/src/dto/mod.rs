pub mod booking;
pub mod trainer;
pub mod user;

pub use booking::*;
pub use trainer::*;
pub use user::*;
