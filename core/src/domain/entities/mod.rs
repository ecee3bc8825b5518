//! Domain entities representing core business objects.

pub mod booking;
pub mod token;
pub mod trainer;
pub mod user;

// Re-export commonly used types
pub use booking::{
    BookingStatus, GymBooking, Payment, PaymentMethod, PaymentStatus, TrainerBooking, WorkoutType,
};
pub use token::{
    Claims, TokenKind, TokenPair, ACCESS_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER,
    REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use trainer::{
    Availability, NewTrainer, Specialization, Trainer, TrainerUpdate, Weekday, WorkingHours,
    DEFAULT_TRAINER_RATING,
};
pub use user::{User, UserSummary};
