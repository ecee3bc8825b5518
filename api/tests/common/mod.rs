//! Shared fixtures for the HTTP integration tests
//!
//! Every test builds its own in-memory state; nothing touches MySQL.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header, web};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use gym_api::app::AppState;
use gym_core::domain::entities::trainer::{
    Availability, NewTrainer, Specialization, Trainer, Weekday, WorkingHours,
};
use gym_core::domain::entities::user::User;
use gym_core::repositories::{
    MockGymBookingRepository, MockTrainerBookingRepository, MockTrainerRepository,
    MockUserRepository, TrainerRepository, UserRepository,
};
use gym_shared::config::AppConfig;

pub const ADMIN_KEY: &str = "test-admin-key";
pub const PASSWORD: &str = "secret123";

pub type TestState = AppState<
    MockUserRepository,
    MockTrainerRepository,
    MockGymBookingRepository,
    MockTrainerBookingRepository,
>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub config: AppConfig,
    pub users: Arc<MockUserRepository>,
    pub trainers: Arc<MockTrainerRepository>,
    pub gym_bookings: Arc<MockGymBookingRepository>,
    pub trainer_bookings: Arc<MockTrainerBookingRepository>,
}

/// Development defaults with a cheap bcrypt cost and a known admin key
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.bcrypt_cost = 4;
    config.auth.admin_api_key = Some(ADMIN_KEY.to_string());
    config
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let users = Arc::new(MockUserRepository::new());
        let trainers = MockTrainerRepository::new();
        let trainer_bookings = Arc::new(MockTrainerBookingRepository::new(trainers.clone()));
        let trainers = Arc::new(trainers);
        let gym_bookings = Arc::new(MockGymBookingRepository::new());

        let state = AppState::new(
            Arc::clone(&users),
            Arc::clone(&trainers),
            Arc::clone(&gym_bookings),
            Arc::clone(&trainer_bookings),
            &config,
        )
        .expect("test state");

        Self {
            state: web::Data::new(state),
            config,
            users,
            trainers,
            gym_bookings,
            trainer_bookings,
        }
    }

    /// Stores a member directly and returns it with a valid access token
    pub async fn member(&self, name: &str, email: &str, phone: &str) -> (User, String) {
        let user = self
            .users
            .create(User::new(name, email, phone, "not-a-real-hash".to_string()))
            .await
            .expect("create member");
        let tokens = self
            .state
            .token_service
            .issue_tokens(&user)
            .expect("issue tokens");
        (user, tokens.access_token)
    }

    /// Stores a trainer directly
    pub async fn trainer(&self, name: &str, email: &str, rate: f64) -> Trainer {
        let trainer = Trainer::new(new_trainer(name, email, rate)).expect("valid trainer");
        self.trainers.create(trainer).await.expect("create trainer")
    }
}

pub fn new_trainer(name: &str, email: &str, rate: f64) -> NewTrainer {
    NewTrainer {
        name: name.to_string(),
        email: email.to_string(),
        specialization: Specialization::WeightTraining,
        experience: 5,
        rate,
        availability: Availability {
            days: vec![Weekday::Mon, Weekday::Wed],
            hours: WorkingHours {
                start: "06:00".to_string(),
                end: "12:00".to_string(),
            },
        },
        rating: None,
        bio: None,
    }
}

pub fn signup_body(name: &str, email: &str, phone: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "phoneNumber": phone,
        "password": PASSWORD,
    })
}

pub fn trainer_body(name: &str, email: &str, rate: f64) -> Value {
    json!({
        "name": name,
        "email": email,
        "specialization": "Weight Training",
        "experience": 5,
        "rate": rate,
        "availability": {
            "days": ["Mon", "Wed"],
            "hours": { "start": "06:00", "end": "12:00" }
        },
        "bio": "Strength coach"
    })
}

pub fn gym_body(workout_type: &str, duration: i64, transaction_id: &str) -> Value {
    json!({
        "workoutType": workout_type,
        "duration": duration,
        "sessionDate": future_date(),
        "payment": { "method": "khalti", "transactionId": transaction_id }
    })
}

/// RFC 3339 timestamp a few days ahead
pub fn future_date() -> String {
    (Utc::now() + Duration::days(3)).to_rfc3339()
}

pub fn past_date() -> String {
    (Utc::now() - Duration::days(3)).to_rfc3339()
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub fn admin_key() -> (&'static str, &'static str) {
    ("x-admin-key", ADMIN_KEY)
}
