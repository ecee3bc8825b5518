//! User entity representing a registered gym member.

use chrono::{DateTime, Utc};
use gym_shared::validation::validators::normalize_email;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered member
///
/// The password hash never leaves the process: it is skipped by serde in
/// both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name, letters and spaces only
    pub name: String,

    /// Login email, stored trimmed and lower-cased
    pub email: String,

    /// Ten digit contact number
    pub phone_number: String,

    /// bcrypt hash of the password
    #[serde(skip)]
    pub password_hash: String,

    /// Timestamp when the user registered
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User, normalizing name and email
    pub fn new(name: &str, email: &str, phone_number: &str, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: normalize_email(email),
            phone_number: phone_number.trim().to_string(),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the contact number
    pub fn update_phone(&mut self, phone_number: &str) {
        self.phone_number = phone_number.trim().to_string();
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn update_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Public identity returned by signup/signin
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The identity fields of a user that are safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
