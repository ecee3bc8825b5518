//! Trainer directory service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::trainer::{NewTrainer, Trainer, TrainerUpdate};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TrainerRepository;

/// Reads and administers the trainer directory
pub struct TrainerService<T>
where
    T: TrainerRepository,
{
    trainer_repository: Arc<T>,
}

impl<T> TrainerService<T>
where
    T: TrainerRepository,
{
    pub fn new(trainer_repository: Arc<T>) -> Self {
        Self { trainer_repository }
    }

    /// All trainers, sorted by name
    pub async fn list(&self) -> DomainResult<Vec<Trainer>> {
        self.trainer_repository.list().await
    }

    /// A single trainer
    ///
    /// # Returns
    ///
    /// * `Ok(Trainer)` - The trainer
    /// * `Err(DomainError::NotFound)` - No trainer with that id
    pub async fn get(&self, id: Uuid) -> DomainResult<Trainer> {
        self.trainer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Trainer"))
    }

    /// List a new trainer
    ///
    /// # Returns
    ///
    /// * `Ok(Trainer)` - The stored trainer
    /// * `Err(DomainError::ValidationErr)` - A field failed validation
    /// * `Err(DomainError::Conflict)` - The email is already listed
    pub async fn create(&self, input: NewTrainer) -> DomainResult<Trainer> {
        let trainer = Trainer::new(input)?;

        if self
            .trainer_repository
            .find_by_email(&trainer.email)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                "email",
                "Trainer email is already registered",
            ));
        }

        let trainer = self.trainer_repository.create(trainer).await?;
        tracing::info!(trainer_id = %trainer.id, "Trainer created");
        Ok(trainer)
    }

    /// Partially update a trainer
    ///
    /// Existing bookings keep the name and rate they were priced with.
    pub async fn update(&self, id: Uuid, update: TrainerUpdate) -> DomainResult<Trainer> {
        let mut trainer = self.get(id).await?;
        trainer.apply(update)?;

        if let Some(other) = self.trainer_repository.find_by_email(&trainer.email).await? {
            if other.id != id {
                return Err(DomainError::conflict(
                    "email",
                    "Trainer email is already registered",
                ));
            }
        }

        let trainer = self.trainer_repository.update(trainer).await?;
        tracing::info!(trainer_id = %trainer.id, "Trainer updated");
        Ok(trainer)
    }

    /// Remove a trainer
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.trainer_repository.delete(id).await? {
            return Err(DomainError::not_found("Trainer"));
        }
        tracing::info!(trainer_id = %id, "Trainer deleted");
        Ok(())
    }

    /// Remove every trainer, returning how many were deleted
    pub async fn delete_all(&self) -> DomainResult<u64> {
        let deleted = self.trainer_repository.delete_all().await?;
        tracing::warn!(deleted, "All trainers deleted");
        Ok(deleted)
    }
}
