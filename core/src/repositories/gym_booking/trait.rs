//! Gym booking repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::GymBooking;
use crate::errors::DomainError;

/// Repository trait for gym session bookings
///
/// The payment transaction id is unique across all gym bookings. Storing a
/// second booking with the same id fails with `DomainError::Conflict` on
/// field `transactionId`, which makes client retries safe.
#[async_trait]
pub trait GymBookingRepository: Send + Sync {
    /// Insert a booking
    async fn create(&self, booking: GymBooking) -> Result<GymBooking, DomainError>;

    /// Find the booking paid with the given provider reference
    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<GymBooking>, DomainError>;

    /// All bookings, newest first
    async fn list_all(&self) -> Result<Vec<GymBooking>, DomainError>;

    /// Bookings owned by one user, newest first
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<GymBooking>, DomainError>;
}
