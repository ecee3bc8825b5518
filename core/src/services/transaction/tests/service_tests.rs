//! Unit tests for the transaction view

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};

use crate::domain::entities::trainer::{
    Availability, NewTrainer, Specialization, Trainer, TrainerUpdate, Weekday, WorkingHours,
};
use crate::domain::entities::user::User;
use crate::domain::value_objects::TransactionKind;
use crate::repositories::{
    MockGymBookingRepository, MockTrainerBookingRepository, MockTrainerRepository,
    MockUserRepository, TrainerRepository, UserRepository,
};
use crate::services::booking::{
    BookingService, BookingServiceConfig, GymBookingRequest, TrainerBookingRequest,
};
use crate::services::trainer::TrainerService;
use crate::services::transaction::TransactionService;

struct Fixture {
    bookings: BookingService<
        MockUserRepository,
        MockTrainerRepository,
        MockGymBookingRepository,
        MockTrainerBookingRepository,
    >,
    trainers: TrainerService<MockTrainerRepository>,
    transactions: TransactionService<MockGymBookingRepository, MockTrainerBookingRepository>,
    trainer_repository: Arc<MockTrainerRepository>,
    user: User,
}

async fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let trainer_table = MockTrainerRepository::new();
    let trainer_bookings = Arc::new(MockTrainerBookingRepository::new(trainer_table.clone()));
    let trainer_repository = Arc::new(trainer_table);
    let gym_bookings = Arc::new(MockGymBookingRepository::new());

    let user = users
        .create(User::new(
            "Asha Rai",
            "asha@example.com",
            "9876543210",
            "hash".to_string(),
        ))
        .await
        .unwrap();

    Fixture {
        bookings: BookingService::new(
            Arc::clone(&users),
            Arc::clone(&trainer_repository),
            Arc::clone(&gym_bookings),
            Arc::clone(&trainer_bookings),
            BookingServiceConfig::default(),
        ),
        trainers: TrainerService::new(Arc::clone(&trainer_repository)),
        transactions: TransactionService::new(gym_bookings, trainer_bookings),
        trainer_repository,
        user,
    }
}

async fn listed_trainer(fixture: &Fixture) -> Trainer {
    fixture
        .trainers
        .create(NewTrainer {
            name: "Rohan".to_string(),
            email: "rohan@gym.com".to_string(),
            specialization: Specialization::Yoga,
            experience: 3,
            rate: 500.0,
            availability: Availability {
                days: vec![Weekday::Fri],
                hours: WorkingHours {
                    start: "09:00".to_string(),
                    end: "17:00".to_string(),
                },
            },
            rating: None,
            bio: None,
        })
        .await
        .unwrap()
}

fn trainer_request() -> TrainerBookingRequest {
    TrainerBookingRequest {
        duration: 2,
        session_date: (Utc::now() + Duration::days(1)).to_rfc3339(),
    }
}

#[tokio::test]
async fn test_merges_both_kinds_newest_first() {
    let fixture = fixture().await;
    let trainer = listed_trainer(&fixture).await;

    fixture
        .bookings
        .book_gym_session(
            Some(fixture.user.id),
            GymBookingRequest {
                workout_type: "cardio".to_string(),
                duration: 3,
                session_date: "2030-01-01".to_string(),
                payment_method: "khalti".to_string(),
                transaction_id: "txn-1".to_string(),
            },
        )
        .await
        .unwrap();
    tokio::time::sleep(StdDuration::from_millis(5)).await;
    fixture
        .bookings
        .book_trainer_session(trainer.id, fixture.user.id, trainer_request())
        .await
        .unwrap();

    let history = fixture
        .transactions
        .list_for_user(fixture.user.id)
        .await
        .unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind, TransactionKind::Trainer);
    assert_eq!(history[0].description, "Training with Rohan");
    assert_eq!(history[0].status, "pending");
    assert_eq!(history[1].kind, TransactionKind::Gym);
    assert_eq!(history[1].description, "3h cardio Session");
    assert_eq!(history[1].amount, 750.0);
    assert_eq!(history[1].status, "confirmed");
    assert_eq!(history[1].payment_status, "completed");
}

#[tokio::test]
async fn test_anonymous_gym_bookings_are_not_listed() {
    let fixture = fixture().await;

    fixture
        .bookings
        .book_gym_session(
            None,
            GymBookingRequest {
                workout_type: "exercise".to_string(),
                duration: 1,
                session_date: "2030-01-01".to_string(),
                payment_method: "khalti".to_string(),
                transaction_id: "txn-anon".to_string(),
            },
        )
        .await
        .unwrap();

    let history = fixture
        .transactions
        .list_for_user(fixture.user.id)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_history_survives_trainer_edits() {
    let fixture = fixture().await;
    let trainer = listed_trainer(&fixture).await;

    fixture
        .bookings
        .book_trainer_session(trainer.id, fixture.user.id, trainer_request())
        .await
        .unwrap();

    fixture
        .trainers
        .update(
            trainer.id,
            TrainerUpdate {
                name: Some("Rohan Sharma".to_string()),
                rate: Some(900.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let history = fixture
        .transactions
        .list_for_user(fixture.user.id)
        .await
        .unwrap();
    assert_eq!(history[0].amount, 1000.0);
    assert_eq!(history[0].trainer_name.as_deref(), Some("Rohan"));

    fixture.trainer_repository.delete(trainer.id).await.unwrap();
    let history = fixture
        .transactions
        .list_for_user(fixture.user.id)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].amount, 1000.0);
}
