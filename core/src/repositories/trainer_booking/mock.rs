//! In-memory implementation of TrainerBookingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::TrainerBooking;
use crate::errors::DomainError;
use crate::repositories::trainer::{MockTrainerRepository, TrainerRepository};

use super::trait_::TrainerBookingRepository;

/// Mock trainer booking repository for testing
///
/// Trainer existence is checked against the given trainer repository while
/// the booking table's write lock is held.
#[derive(Clone)]
pub struct MockTrainerBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, TrainerBooking>>>,
    trainers: MockTrainerRepository,
}

impl MockTrainerBookingRepository {
    pub fn new(trainers: MockTrainerRepository) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
            trainers,
        }
    }

    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }
}

#[async_trait]
impl TrainerBookingRepository for MockTrainerBookingRepository {
    async fn create_if_trainer_exists(
        &self,
        booking: TrainerBooking,
    ) -> Result<Option<TrainerBooking>, DomainError> {
        let mut bookings = self.bookings.write().await;
        if self.trainers.find_by_id(booking.trainer_id).await?.is_none() {
            return Ok(None);
        }
        bookings.insert(booking.id, booking.clone());
        Ok(Some(booking))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TrainerBooking>, DomainError> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn cancel_for_user(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TrainerBooking>, DomainError> {
        let mut bookings = self.bookings.write().await;
        match bookings.get_mut(&booking_id) {
            Some(booking) if booking.user_id == user_id => {
                booking.cancel();
                Ok(Some(booking.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TrainerBooking>, DomainError> {
        let bookings = self.bookings.read().await;
        let mut mine: Vec<TrainerBooking> = bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }
}
