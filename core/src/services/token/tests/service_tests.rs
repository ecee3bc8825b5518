//! Unit tests for token issuance and verification

use chrono::Duration;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::{Claims, TokenKind};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::default())
}

fn user() -> User {
    User::new("Asha Rai", "asha@example.com", "9876543210", "hash".to_string())
}

fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_issued_access_token_verifies() {
    let service = service();
    let user = user();

    let pair = service.issue_tokens(&user).unwrap();
    let claims = service.verify_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "asha@example.com");
    assert_eq!(claims.kind, TokenKind::Access);
    assert_eq!(pair.expires_in, 86400);
    assert_eq!(pair.refresh_expires_in, 7 * 86400);
}

#[test]
fn test_issued_refresh_token_verifies() {
    let service = service();
    let user = user();

    let pair = service.issue_tokens(&user).unwrap();
    let claims = service.verify_refresh_token(&pair.refresh_token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.kind, TokenKind::Refresh);
}

#[test]
fn test_tokens_are_unique_per_issue() {
    let service = service();
    let user = user();

    let first = service.issue_tokens(&user).unwrap();
    let second = service.issue_tokens(&user).unwrap();

    assert_ne!(first.access_token, second.access_token);
    assert_ne!(first.refresh_token, second.refresh_token);
}

#[test]
fn test_refresh_token_rejected_as_access_token() {
    let service = service();
    let pair = service.issue_tokens(&user()).unwrap();

    let result = service.verify_access_token(&pair.refresh_token);
    assert!(matches!(result, Err(DomainError::Token(_))));

    let result = service.verify_refresh_token(&pair.access_token);
    assert!(matches!(result, Err(DomainError::Token(_))));
}

#[test]
fn test_kind_claim_is_checked_even_with_matching_secret() {
    let config = TokenServiceConfig::default();
    let service = TokenService::new(config.clone());
    let claims = Claims::new(
        &user(),
        TokenKind::Refresh,
        Duration::hours(1),
        &config.issuer,
        &config.audience,
    );
    let token = sign(&claims, &config.access_secret);

    let result = service.verify_access_token(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::WrongTokenKind { .. }))
    ));
}

#[test]
fn test_expired_token_rejected() {
    let config = TokenServiceConfig::default();
    let service = TokenService::new(config.clone());
    let mut claims = Claims::new(
        &user(),
        TokenKind::Access,
        Duration::hours(1),
        &config.issuer,
        &config.audience,
    );
    claims.iat -= 7200;
    claims.nbf -= 7200;
    claims.exp -= 7200;
    let token = sign(&claims, &config.access_secret);

    let result = service.verify_access_token(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_token_from_short_lived_config_expires() {
    let config = TokenServiceConfig {
        access_token_expiry_seconds: 1,
        ..Default::default()
    };
    let service = TokenService::new(config);
    let pair = service.issue_tokens(&user()).unwrap();

    assert!(service.verify_access_token(&pair.access_token).is_ok());

    std::thread::sleep(std::time::Duration::from_millis(2100));
    let result = service.verify_access_token(&pair.access_token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_foreign_signature_rejected() {
    let config = TokenServiceConfig::default();
    let service = TokenService::new(config.clone());
    let claims = Claims::new(
        &user(),
        TokenKind::Access,
        Duration::hours(1),
        &config.issuer,
        &config.audience,
    );
    let token = sign(&claims, "some-other-secret");

    let result = service.verify_access_token(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_wrong_audience_rejected() {
    let config = TokenServiceConfig::default();
    let service = TokenService::new(config.clone());
    let claims = Claims::new(
        &user(),
        TokenKind::Access,
        Duration::hours(1),
        &config.issuer,
        "another-api",
    );
    let token = sign(&claims, &config.access_secret);

    assert!(service.verify_access_token(&token).is_err());
}

#[test]
fn test_garbage_rejected() {
    let service = service();

    let result = service.verify_access_token("not.a.jwt");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
    assert!(service.verify_access_token("").is_err());
}
