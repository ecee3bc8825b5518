//! Main booking service implementation

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use gym_shared::date::parse_session_date;
use uuid::Uuid;

use crate::domain::entities::booking::{
    GymBooking, Payment, PaymentMethod, TrainerBooking, WorkoutType,
};
use crate::domain::value_objects::TrainerBookingView;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};

use super::config::BookingServiceConfig;
use super::types::{GymBookingRequest, TrainerBookingRequest};

/// Booking service for gym and trainer sessions
pub struct BookingService<U, T, G, B>
where
    U: UserRepository,
    T: TrainerRepository,
    G: GymBookingRepository,
    B: TrainerBookingRepository,
{
    user_repository: Arc<U>,
    trainer_repository: Arc<T>,
    gym_booking_repository: Arc<G>,
    trainer_booking_repository: Arc<B>,
    config: BookingServiceConfig,
}

impl<U, T, G, B> BookingService<U, T, G, B>
where
    U: UserRepository,
    T: TrainerRepository,
    G: GymBookingRepository,
    B: TrainerBookingRepository,
{
    /// Create a new booking service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Member lookups for booking responses
    /// * `trainer_repository` - Trainer lookups for pricing
    /// * `gym_booking_repository` - Gym session persistence
    /// * `trainer_booking_repository` - Trainer session persistence
    /// * `config` - Prices and save timeout
    pub fn new(
        user_repository: Arc<U>,
        trainer_repository: Arc<T>,
        gym_booking_repository: Arc<G>,
        trainer_booking_repository: Arc<B>,
        config: BookingServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            trainer_repository,
            gym_booking_repository,
            trainer_booking_repository,
            config,
        }
    }

    /// Price of a gym session
    pub fn gym_session_price(&self, workout_type: WorkoutType, duration: u32) -> f64 {
        let rate = match workout_type {
            WorkoutType::Cardio => self.config.cardio_rate,
            WorkoutType::Exercise => self.config.exercise_rate,
        };
        rate * f64::from(duration)
    }

    /// Book and price a gym session
    ///
    /// This method:
    /// 1. Parses workout type, duration, session date and payment method
    /// 2. Rejects a payment reference that was already used
    /// 3. Computes the amount server-side and stores the booking
    ///
    /// `owner` is recorded when the request carried a valid session, so the
    /// booking shows up in that member's transactions.
    ///
    /// # Returns
    ///
    /// * `Ok(GymBooking)` - The stored booking
    /// * `Err(DomainError::ValidationErr)` - A field failed validation
    /// * `Err(DomainError::Conflict)` - The transaction id was already used
    /// * `Err(DomainError::Internal)` - Storage failed or timed out
    pub async fn book_gym_session(
        &self,
        owner: Option<Uuid>,
        request: GymBookingRequest,
    ) -> DomainResult<GymBooking> {
        // Step 1: Parse the request
        let workout_type = WorkoutType::parse(request.workout_type.trim()).ok_or_else(|| {
            ValidationError::InvalidFormat {
                field: "workoutType".to_string(),
            }
        })?;
        let duration = u32::try_from(request.duration)
            .ok()
            .filter(|d| *d >= 1)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "duration".to_string(),
                min: "1".to_string(),
                max: u32::MAX.to_string(),
            })?;
        let session_date = parse_session_date(&request.session_date).ok_or_else(|| {
            ValidationError::InvalidDate {
                field: "sessionDate".to_string(),
            }
        })?;
        let method = PaymentMethod::parse(request.payment_method.trim()).ok_or_else(|| {
            ValidationError::InvalidFormat {
                field: "payment.method".to_string(),
            }
        })?;
        let transaction_id = request.transaction_id.trim().to_string();
        if transaction_id.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "payment.transactionId".to_string(),
            }
            .into());
        }

        // Step 2: One booking per payment reference
        if self
            .gym_booking_repository
            .find_by_transaction_id(&transaction_id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                "transactionId",
                "A booking already exists for this payment",
            ));
        }

        // Step 3: Price and store
        let payment = Payment {
            method,
            transaction_id,
            amount: self.gym_session_price(workout_type, duration),
        };
        let booking = GymBooking::new(owner, workout_type, duration, session_date, payment);
        let booking = self
            .with_save_timeout(self.gym_booking_repository.create(booking))
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            workout_type = booking.workout_type.as_str(),
            duration = booking.duration,
            amount = booking.payment.amount,
            "Gym session booked"
        );
        Ok(booking)
    }

    /// Book a session with a trainer
    ///
    /// Checks run in order and the first failure wins:
    /// 1. The trainer exists
    /// 2. The duration is between 1 and the configured maximum hours
    /// 3. The session date parses and lies strictly in the future
    ///
    /// The amount is the trainer's current rate times the duration, frozen
    /// into the booking together with the trainer's name.
    ///
    /// # Returns
    ///
    /// * `Ok(TrainerBookingView)` - The stored booking with trainer and member details
    /// * `Err(DomainError::NotFound)` - No such trainer, or it was deleted meanwhile
    /// * `Err(DomainError::ValidationErr)` - Bad duration or session date
    pub async fn book_trainer_session(
        &self,
        trainer_id: Uuid,
        caller_id: Uuid,
        request: TrainerBookingRequest,
    ) -> DomainResult<TrainerBookingView> {
        let trainer = self
            .trainer_repository
            .find_by_id(trainer_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Trainer"))?;

        let max_hours = self.config.max_trainer_hours;
        let duration = u32::try_from(request.duration)
            .ok()
            .filter(|d| (1..=max_hours).contains(d))
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "duration".to_string(),
                min: "1".to_string(),
                max: max_hours.to_string(),
            })?;

        let session_date = parse_session_date(&request.session_date).ok_or_else(|| {
            ValidationError::InvalidDate {
                field: "sessionDate".to_string(),
            }
        })?;
        if session_date <= Utc::now() {
            return Err(ValidationError::DateInPast {
                field: "sessionDate".to_string(),
            }
            .into());
        }

        let customer = self
            .user_repository
            .find_by_id(caller_id)
            .await?
            .ok_or(AuthError::AccountRemoved)?;

        let booking = TrainerBooking::new(
            caller_id,
            trainer.id,
            trainer.name.clone(),
            trainer.rate,
            duration,
            session_date,
        );
        let booking = self
            .with_save_timeout(self.trainer_booking_repository.create_if_trainer_exists(booking))
            .await?
            .ok_or_else(|| DomainError::not_found("Trainer"))?;

        tracing::info!(
            booking_id = %booking.id,
            trainer_id = %booking.trainer_id,
            duration = booking.duration,
            amount = booking.amount,
            "Trainer session booked"
        );
        Ok(TrainerBookingView::new(&booking, &customer))
    }

    /// Cancel one of the caller's trainer bookings
    ///
    /// A booking owned by someone else is reported exactly like a missing
    /// one and is left untouched. Cancelling twice returns the booking again.
    pub async fn cancel_trainer_booking(
        &self,
        booking_id: Uuid,
        caller_id: Uuid,
    ) -> DomainResult<TrainerBooking> {
        let booking = self
            .with_save_timeout(
                self.trainer_booking_repository
                    .cancel_for_user(booking_id, caller_id),
            )
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        tracing::info!(booking_id = %booking.id, "Trainer session cancelled");
        Ok(booking)
    }

    /// Every gym booking, newest first
    pub async fn list_gym_bookings(&self) -> DomainResult<Vec<GymBooking>> {
        self.gym_booking_repository.list_all().await
    }

    async fn with_save_timeout<F, R>(&self, save: F) -> DomainResult<R>
    where
        F: Future<Output = DomainResult<R>>,
    {
        match tokio::time::timeout(self.config.save_timeout, save).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    timeout_secs = self.config.save_timeout.as_secs(),
                    "Booking save timed out"
                );
                Err(DomainError::internal("operation timed out"))
            }
        }
    }
}
