//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies HS256 session tokens
///
/// Access and refresh tokens use different secrets, so one can never be
/// replayed as the other even if the `kind` claim were forged.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "sub", "iss", "aud"]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            access_encoding_key: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding_key: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding_key: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding_key: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            config,
            validation,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.config.refresh_token_expiry_seconds
    }

    /// Issues a fresh access/refresh pair for a user
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The signed tokens and their lifetimes
    /// * `Err(DomainError::Token(TokenGenerationFailed))` - Signing failed
    pub fn issue_tokens(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_claims = self.claims_for(user, TokenKind::Access);
        let refresh_claims = self.claims_for(user, TokenKind::Refresh);

        Ok(TokenPair {
            access_token: self.encode_jwt(&access_claims, &self.access_encoding_key)?,
            refresh_token: self.encode_jwt(&refresh_claims, &self.refresh_encoding_key)?,
            expires_in: self.config.access_token_expiry_seconds,
            refresh_expires_in: self.config.refresh_token_expiry_seconds,
        })
    }

    /// Verifies an access token and returns the claims
    ///
    /// Every failure is a `DomainError::Token`, which the API reports as 401.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify(token, &self.access_decoding_key, TokenKind::Access)
    }

    /// Verifies a refresh token and returns the claims
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify(token, &self.refresh_decoding_key, TokenKind::Refresh)
    }

    fn claims_for(&self, user: &User, kind: TokenKind) -> Claims {
        let lifetime = match kind {
            TokenKind::Access => self.config.access_token_expiry_seconds,
            TokenKind::Refresh => self.config.refresh_token_expiry_seconds,
        };
        Claims::new(
            user,
            kind,
            Duration::seconds(lifetime),
            &self.config.issuer,
            &self.config.audience,
        )
    }

    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    fn verify(
        &self,
        token: &str,
        key: &DecodingKey,
        expected: TokenKind,
    ) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            let error = match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => TokenError::InvalidClaims,
                _ => TokenError::InvalidTokenFormat,
            };
            DomainError::Token(error)
        })?;

        let claims = token_data.claims;
        if claims.kind != expected {
            return Err(DomainError::Token(TokenError::WrongTokenKind {
                expected: expected.as_str().to_string(),
            }));
        }
        if claims.user_id().is_err() {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }

        Ok(claims)
    }
}
