//! In-memory implementation of TrainerRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::trainer::Trainer;
use crate::errors::DomainError;

use super::trait_::TrainerRepository;

/// Mock trainer repository for testing
///
/// Clones share the same table.
#[derive(Clone, Default)]
pub struct MockTrainerRepository {
    trainers: Arc<RwLock<HashMap<Uuid, Trainer>>>,
}

impl MockTrainerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(trainers: &HashMap<Uuid, Trainer>, candidate: &Trainer) -> bool {
    trainers
        .values()
        .any(|t| t.id != candidate.id && t.email == candidate.email)
}

#[async_trait]
impl TrainerRepository for MockTrainerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Trainer>, DomainError> {
        Ok(self.trainers.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Trainer>, DomainError> {
        let trainers = self.trainers.read().await;
        Ok(trainers.values().find(|t| t.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<Trainer>, DomainError> {
        let trainers = self.trainers.read().await;
        let mut all: Vec<Trainer> = trainers.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn create(&self, trainer: Trainer) -> Result<Trainer, DomainError> {
        let mut trainers = self.trainers.write().await;
        if email_taken(&trainers, &trainer) {
            return Err(DomainError::conflict("email", "Trainer email is already registered"));
        }
        trainers.insert(trainer.id, trainer.clone());
        Ok(trainer)
    }

    async fn update(&self, trainer: Trainer) -> Result<Trainer, DomainError> {
        let mut trainers = self.trainers.write().await;
        if !trainers.contains_key(&trainer.id) {
            return Err(DomainError::not_found("Trainer"));
        }
        if email_taken(&trainers, &trainer) {
            return Err(DomainError::conflict("email", "Trainer email is already registered"));
        }
        trainers.insert(trainer.id, trainer.clone());
        Ok(trainer)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.trainers.write().await.remove(&id).is_some())
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let mut trainers = self.trainers.write().await;
        let count = trainers.len() as u64;
        trainers.clear();
        Ok(count)
    }
}
