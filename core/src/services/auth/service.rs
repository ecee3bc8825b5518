//! Main authentication service implementation

use std::sync::Arc;

use gym_shared::phone::{is_valid_phone, mask_phone_number, normalize_phone_number};
use gym_shared::validation::validators;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::types::{Credentials, NewUser};

/// Authentication service for member accounts and sessions
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// bcrypt hashing, run off the async executor
    password_hasher: Arc<PasswordHasher>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `password_hasher` - bcrypt hasher
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        password_hasher: Arc<PasswordHasher>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Token service used to verify incoming requests
    pub fn token_service(&self) -> Arc<TokenService> {
        Arc::clone(&self.token_service)
    }

    /// Register a new member and open a session
    ///
    /// This method:
    /// 1. Validates name, email, phone number and password
    /// 2. Rejects an email or phone number that is already registered
    /// 3. Hashes the password and stores the user
    /// 4. Issues an access/refresh token pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The new user's summary and tokens
    /// * `Err(DomainError::ValidationErr)` - A field failed validation
    /// * `Err(DomainError::Conflict)` - Email or phone number already in use
    pub async fn signup(&self, input: NewUser) -> DomainResult<AuthResponse> {
        // Step 1: Field validation
        self.validate_name(&input.name)?;
        if !validators::is_valid_email(&input.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        let phone = normalize_phone_number(&input.phone_number);
        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidFormat {
                field: "phoneNumber".to_string(),
            }
            .into());
        }
        self.validate_password(&input.password)?;

        // Step 2: Uniqueness, email first
        let email = validators::normalize_email(&input.email);
        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::conflict(
                "email",
                AuthError::EmailAlreadyRegistered.to_string(),
            ));
        }
        if self.user_repository.find_by_phone(&phone).await?.is_some() {
            return Err(DomainError::conflict(
                "phoneNumber",
                AuthError::PhoneAlreadyRegistered.to_string(),
            ));
        }

        // Step 3: Persist; the store's unique indexes still catch a racing signup
        let password_hash = self.password_hasher.hash(&input.password).await?;
        let user = User::new(&input.name, &email, &phone, password_hash);
        let user = self.user_repository.create(user).await?;

        tracing::info!(
            user_id = %user.id,
            phone = %mask_phone_number(&user.phone_number),
            "New member registered"
        );

        // Step 4: Session
        let tokens = self.token_service.issue_tokens(&user)?;
        Ok(AuthResponse::new(&user, tokens))
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password produce the same
    /// `AuthError::InvalidCredentials`. A bcrypt comparison runs in both
    /// cases so response timing does not reveal whether the account exists.
    pub async fn signin(&self, credentials: Credentials) -> DomainResult<AuthResponse> {
        let email = validators::normalize_email(&credentials.email);

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.password_hasher.verify_dummy(&credentials.password).await?;
                tracing::debug!("Signin attempted for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let valid = self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)
            .await?;
        if !valid {
            tracing::warn!(user_id = %user.id, "Signin rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.token_service.issue_tokens(&user)?;
        tracing::info!(user_id = %user.id, "Member signed in");
        Ok(AuthResponse::new(&user, tokens))
    }

    /// Exchange a refresh token for a fresh token pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - New tokens for the token's user
    /// * `Err(DomainError::Token)` - The refresh token is invalid or expired
    /// * `Err(DomainError::Auth(AccountRemoved))` - The user no longer exists
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::AccountRemoved)?;

        let tokens = self.token_service.issue_tokens(&user)?;
        tracing::debug!(user_id = %user.id, "Session refreshed");
        Ok(AuthResponse::new(&user, tokens))
    }

    /// Profile of the authenticated member
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Replace the member's phone number
    ///
    /// Setting the number the member already has is a successful no-op.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::ValidationErr)` - Not a ten digit number
    /// * `Err(DomainError::Conflict)` - Another member uses the number
    /// * `Err(DomainError::NotFound)` - The user no longer exists
    pub async fn update_phone(&self, user_id: Uuid, phone: &str) -> DomainResult<User> {
        let phone = normalize_phone_number(phone);
        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidFormat {
                field: "phone".to_string(),
            }
            .into());
        }

        let mut user = self.current_user(user_id).await?;
        if user.phone_number == phone {
            return Ok(user);
        }

        if let Some(owner) = self.user_repository.find_by_phone(&phone).await? {
            if owner.id != user_id {
                return Err(DomainError::conflict(
                    "phone",
                    AuthError::PhoneAlreadyRegistered.to_string(),
                ));
            }
        }

        user.update_phone(&phone);
        let user = self.user_repository.update(user).await?;
        tracing::info!(
            user_id = %user.id,
            phone = %mask_phone_number(&user.phone_number),
            "Phone number updated"
        );
        Ok(user)
    }

    /// Replace the member's password after checking the current one
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        self.validate_password(new_password)?;

        let mut user = self.current_user(user_id).await?;
        let valid = self
            .password_hasher
            .verify(current_password, &user.password_hash)
            .await?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = self.password_hasher.hash(new_password).await?;
        user.update_password_hash(password_hash);
        self.user_repository.update(user).await?;

        tracing::info!(user_id = %user_id, "Password changed");
        Ok(())
    }

    /// Delete an account; members may only delete their own
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The account was removed
    /// * `Err(DomainError::Auth(AccountMismatch))` - Caller is not the target
    /// * `Err(DomainError::NotFound)` - No such account
    pub async fn delete_account(&self, caller_id: Uuid, target_id: Uuid) -> DomainResult<()> {
        if caller_id != target_id {
            tracing::warn!(
                caller_id = %caller_id,
                target_id = %target_id,
                "Refused to delete another member's account"
            );
            return Err(AuthError::AccountMismatch.into());
        }

        if !self.user_repository.delete(target_id).await? {
            return Err(DomainError::not_found("User"));
        }

        tracing::info!(user_id = %target_id, "Account deleted");
        Ok(())
    }

    /// Every registered member, oldest first
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.list().await
    }

    fn validate_name(&self, name: &str) -> DomainResult<()> {
        if !validators::not_empty(name) {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if !validators::length_between(name.trim(), 1, self.config.max_name_length) {
            return Err(ValidationError::InvalidLength {
                field: "name".to_string(),
                min: 1,
                max: self.config.max_name_length,
            }
            .into());
        }
        if !validators::is_valid_name(name) {
            return Err(ValidationError::InvalidFormat {
                field: "name".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn validate_password(&self, password: &str) -> DomainResult<()> {
        let (min, max) = (
            self.config.min_password_length,
            self.config.max_password_length,
        );
        if password.chars().count() < min || password.len() > max {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min,
                max,
            }
            .into());
        }
        Ok(())
    }
}
