//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Conflict { field: String, message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

/// Coarse error categories, one per HTTP status the API emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl DomainError {
    /// Shorthand for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a storage or runtime failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Shorthand for a uniqueness violation on `field`
    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Conflict {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Map the error onto the taxonomy shared by every endpoint
    pub fn category(&self) -> ErrorCategory {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                ErrorCategory::Validation
            }
            DomainError::NotFound { .. } => ErrorCategory::NotFound,
            DomainError::Conflict { .. } => ErrorCategory::Conflict,
            DomainError::Forbidden { .. } => ErrorCategory::Forbidden,
            DomainError::Unauthorized | DomainError::Token(_) => ErrorCategory::Unauthorized,
            DomainError::Internal { .. } => ErrorCategory::Internal,
            DomainError::Auth(auth) => match auth {
                AuthError::InvalidCredentials | AuthError::AccountRemoved => {
                    ErrorCategory::Unauthorized
                }
                AuthError::EmailAlreadyRegistered | AuthError::PhoneAlreadyRegistered => {
                    ErrorCategory::Conflict
                }
                AuthError::AccountMismatch | AuthError::AdminAccessRequired => {
                    ErrorCategory::Forbidden
                }
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
