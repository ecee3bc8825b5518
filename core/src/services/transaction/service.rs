//! Transaction history implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::value_objects::Transaction;
use crate::errors::DomainResult;
use crate::repositories::{GymBookingRepository, TrainerBookingRepository};

/// Builds a member's payment history from both booking kinds
pub struct TransactionService<G, B>
where
    G: GymBookingRepository,
    B: TrainerBookingRepository,
{
    gym_booking_repository: Arc<G>,
    trainer_booking_repository: Arc<B>,
}

impl<G, B> TransactionService<G, B>
where
    G: GymBookingRepository,
    B: TrainerBookingRepository,
{
    pub fn new(gym_booking_repository: Arc<G>, trainer_booking_repository: Arc<B>) -> Self {
        Self {
            gym_booking_repository,
            trainer_booking_repository,
        }
    }

    /// Gym and trainer bookings of `user_id`, newest first
    ///
    /// Amounts and trainer names come from the booking snapshots, so later
    /// trainer edits or deletions do not rewrite history.
    pub async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Transaction>> {
        let gym = self.gym_booking_repository.list_by_user(user_id).await?;
        let trainer = self.trainer_booking_repository.list_by_user(user_id).await?;

        let mut transactions: Vec<Transaction> = gym
            .iter()
            .map(Transaction::from)
            .chain(trainer.iter().map(Transaction::from))
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(
            user_id = %user_id,
            count = transactions.len(),
            "Transactions listed"
        );
        Ok(transactions)
    }
}
