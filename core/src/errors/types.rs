//! Error types for authentication, tokens and input validation

use thiserror::Error;

/// Authentication and account ownership errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Phone number is already registered")]
    PhoneAlreadyRegistered,

    #[error("You can only manage your own account")]
    AccountMismatch,

    #[error("Account no longer exists")]
    AccountRemoved,

    #[error("Administrator access required")]
    AdminAccessRequired,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("No token provided")]
    MissingToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token is not a {expected} token")]
    WrongTokenKind { expected: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("{field} has an invalid format")]
    InvalidFormat { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("{field} is not a valid date")]
    InvalidDate { field: String },

    #[error("{field} must be in the future")]
    DateInPast { field: String },
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::InvalidDate { field }
            | ValidationError::DateInPast { field } => Some(field),
            ValidationError::InvalidEmail => Some("email"),
        }
    }
}
