//! User repository trait defining the interface for member persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations must enforce uniqueness of `email` and `phone_number`
/// themselves (a unique index in SQL), reporting a violation as
/// `DomainError::Conflict` naming the field. Services check first for a
/// friendlier message, but two concurrent signups can still race past that
/// check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Storage error
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by normalized (trimmed, lower-cased) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by ten digit phone number
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Conflict)` - Email or phone already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist changes to an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::NotFound)` - No user with that id
    /// * `Err(DomainError::Conflict)` - New phone number belongs to someone else
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - No user with that id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// All users, oldest first
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
