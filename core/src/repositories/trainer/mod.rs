#[path = "trait.rs"]
mod trait_;
#[cfg(any(test, feature = "testing"))]
mod mock;


pub use trait_::TrainerRepository;
#[cfg(any(test, feature = "testing"))]
pub use mock::MockTrainerRepository;
