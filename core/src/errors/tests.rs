//! Unit tests for domain error types

use super::*;

#[test]
fn test_validation_errors_are_validation() {
    let error: DomainError = ValidationError::OutOfRange {
        field: "duration".to_string(),
        min: "1".to_string(),
        max: "8".to_string(),
    }
    .into();
    assert_eq!(error.category(), ErrorCategory::Validation);
    assert_eq!(error.to_string(), "duration must be between 1 and 8");
}

#[test]
fn test_token_errors_are_unauthorized() {
    for token_error in [
        TokenError::MissingToken,
        TokenError::TokenExpired,
        TokenError::InvalidSignature,
        TokenError::InvalidTokenFormat,
    ] {
        assert_eq!(
            DomainError::from(token_error).category(),
            ErrorCategory::Unauthorized
        );
    }
}

#[test]
fn test_auth_error_categories() {
    assert_eq!(
        DomainError::from(AuthError::InvalidCredentials).category(),
        ErrorCategory::Unauthorized
    );
    assert_eq!(
        DomainError::from(AuthError::EmailAlreadyRegistered).category(),
        ErrorCategory::Conflict
    );
    assert_eq!(
        DomainError::from(AuthError::AccountMismatch).category(),
        ErrorCategory::Forbidden
    );
}

#[test]
fn test_shorthands() {
    assert!(DomainError::not_found("Booking").is_not_found());
    assert_eq!(DomainError::not_found("Booking").to_string(), "Booking not found");
    assert_eq!(
        DomainError::conflict("transactionId", "Payment already recorded").category(),
        ErrorCategory::Conflict
    );
    assert_eq!(DomainError::internal("db down").category(), ErrorCategory::Internal);
}

#[test]
fn test_validation_error_field() {
    assert_eq!(ValidationError::InvalidEmail.field(), Some("email"));
    assert_eq!(
        ValidationError::DateInPast {
            field: "sessionDate".to_string()
        }
        .field(),
        Some("sessionDate")
    );
}
