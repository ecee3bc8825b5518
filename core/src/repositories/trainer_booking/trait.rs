//! Trainer booking repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::TrainerBooking;
use crate::errors::DomainError;

/// Repository trait for trainer session bookings
#[async_trait]
pub trait TrainerBookingRepository: Send + Sync {
    /// Insert a booking only while its trainer still exists
    ///
    /// The existence check and the insert must be a single atomic step, so a
    /// trainer deleted concurrently never ends up with an orphan booking.
    ///
    /// # Returns
    /// * `Ok(Some(booking))` - Stored
    /// * `Ok(None)` - The trainer no longer exists; nothing was stored
    async fn create_if_trainer_exists(
        &self,
        booking: TrainerBooking,
    ) -> Result<Option<TrainerBooking>, DomainError>;

    /// Find a booking by id regardless of owner
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TrainerBooking>, DomainError>;

    /// Cancel a booking if and only if it belongs to `user_id`
    ///
    /// The update is filtered on both id and owner.
    ///
    /// # Returns
    /// * `Ok(Some(booking))` - The booking after cancellation
    /// * `Ok(None)` - No booking with that id owned by that user
    async fn cancel_for_user(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TrainerBooking>, DomainError>;

    /// Bookings made by one user, newest first
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TrainerBooking>, DomainError>;
}
