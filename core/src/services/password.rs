//! bcrypt password hashing
//!
//! Hashing is CPU bound, so both operations run on tokio's blocking pool.

use crate::errors::DomainError;

/// Plaintext compared against when the account does not exist
const DUMMY_PASSWORD: &str = "gymflow-timing-equalizer";

/// Salted, slow password hashing with bcrypt
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Creates a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Result<Self, DomainError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)
            .map_err(|e| DomainError::internal(format!("Invalid bcrypt cost {}: {}", cost, e)))?;

        Ok(Self { cost, dummy_hash })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a plaintext password
    pub async fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        let plaintext = plaintext.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    /// Checks a plaintext password against a stored hash
    ///
    /// A malformed stored hash verifies as `false`.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        let plaintext = plaintext.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash).unwrap_or(false))
            .await
            .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))
    }

    /// Burns the same work as a real verification, always returning `false`
    pub async fn verify_dummy(&self, plaintext: &str) -> Result<bool, DomainError> {
        let hash = self.dummy_hash.clone();
        self.verify(plaintext, &hash).await?;
        Ok(false)
    }
}
