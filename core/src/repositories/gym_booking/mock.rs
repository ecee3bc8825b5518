//! In-memory implementation of GymBookingRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::GymBooking;
use crate::errors::DomainError;

use super::trait_::GymBookingRepository;

/// Mock gym booking repository for testing
#[derive(Clone, Default)]
pub struct MockGymBookingRepository {
    bookings: Arc<RwLock<Vec<GymBooking>>>,
    /// Artificial latency applied to `create`, for exercising save timeouts
    create_delay: Option<Duration>,
}

impl MockGymBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `create` call sleep first
    pub fn with_create_delay(mut self, delay: Duration) -> Self {
        self.create_delay = Some(delay);
        self
    }

    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }
}

fn newest_first(mut bookings: Vec<GymBooking>) -> Vec<GymBooking> {
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    bookings
}

#[async_trait]
impl GymBookingRepository for MockGymBookingRepository {
    async fn create(&self, booking: GymBooking) -> Result<GymBooking, DomainError> {
        if let Some(delay) = self.create_delay {
            tokio::time::sleep(delay).await;
        }

        let mut bookings = self.bookings.write().await;
        if bookings
            .iter()
            .any(|b| b.payment.transaction_id == booking.payment.transaction_id)
        {
            return Err(DomainError::conflict(
                "transactionId",
                "A booking already exists for this payment",
            ));
        }
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<GymBooking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .find(|b| b.payment.transaction_id == transaction_id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<GymBooking>, DomainError> {
        Ok(newest_first(self.bookings.read().await.clone()))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<GymBooking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(newest_first(
            bookings
                .iter()
                .filter(|b| b.user_id == Some(user_id))
                .cloned()
                .collect(),
        ))
    }
}
