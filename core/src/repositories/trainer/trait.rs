//! Trainer repository trait for the trainer directory.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::trainer::Trainer;
use crate::errors::DomainError;

/// Repository trait for Trainer persistence
///
/// Trainer emails are unique; a violation is reported as
/// `DomainError::Conflict` on field `email`.
#[async_trait]
pub trait TrainerRepository: Send + Sync {
    /// Find a trainer by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Trainer>, DomainError>;

    /// Find a trainer by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<Trainer>, DomainError>;

    /// All trainers ordered by name
    async fn list(&self) -> Result<Vec<Trainer>, DomainError>;

    /// Insert a new trainer
    async fn create(&self, trainer: Trainer) -> Result<Trainer, DomainError>;

    /// Replace an existing trainer
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No trainer with that id
    async fn update(&self, trainer: Trainer) -> Result<Trainer, DomainError>;

    /// Delete one trainer, returning whether it existed
    ///
    /// Existing bookings keep their trainer name and rate snapshots.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every trainer, returning how many were removed
    async fn delete_all(&self) -> Result<u64, DomainError>;
}
