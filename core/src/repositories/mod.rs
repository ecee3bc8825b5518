//! Repository interfaces for persistence, plus in-memory implementations
//! used by tests (enable the `testing` feature to use them from other crates).

pub mod gym_booking;
pub mod trainer;
pub mod trainer_booking;
pub mod user;

pub use gym_booking::GymBookingRepository;
pub use trainer::TrainerRepository;
pub use trainer_booking::TrainerBookingRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "testing"))]
pub use gym_booking::MockGymBookingRepository;
#[cfg(any(test, feature = "testing"))]
pub use trainer::MockTrainerRepository;
#[cfg(any(test, feature = "testing"))]
pub use trainer_booking::MockTrainerBookingRepository;
#[cfg(any(test, feature = "testing"))]
pub use user::MockUserRepository;
