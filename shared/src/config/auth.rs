//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_ACCESS_SECRET: &str = "development-access-secret-change-in-production";
const DEFAULT_REFRESH_SECRET: &str = "development-refresh-secret-change-in-production";

/// Same work factor as `bcrypt::DEFAULT_COST`
const DEFAULT_BCRYPT_COST: u32 = 12;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used to sign access tokens
    pub secret: String,

    /// Secret used to sign refresh tokens
    pub refresh_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_ACCESS_SECRET),
            refresh_secret: String::from(DEFAULT_REFRESH_SECRET),
            access_token_expiry: 86400,   // 1 day
            refresh_token_expiry: 604800, // 7 days
            issuer: String::from("gymflow"),
            audience: String::from("gymflow-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with both signing secrets
    pub fn new(secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Check if either secret is still the built-in development value
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_ACCESS_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }
}

/// Cookie settings for the session side channel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the access token
    pub cookie_name: String,

    /// Name of the cookie carrying the refresh token
    pub refresh_cookie_name: String,

    /// Path the refresh cookie is scoped to
    pub refresh_cookie_path: String,

    /// Cookie secure flag (HTTPS only)
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("token"),
            refresh_cookie_name: String::from("refreshToken"),
            refresh_cookie_path: String::from("/api/auth"),
            secure: false,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// bcrypt work factor for password hashes
    pub bcrypt_cost: u32,

    /// Key expected in `X-Admin-Key` for administrative endpoints
    #[serde(default)]
    pub admin_api_key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            session: SessionConfig::default(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            admin_api_key: None,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET").unwrap_or(defaults.refresh_secret);
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_expiry);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BCRYPT_COST);
        let admin_api_key = std::env::var("ADMIN_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self {
            jwt: JwtConfig {
                secret,
                refresh_secret,
                access_token_expiry,
                refresh_token_expiry,
                issuer: defaults.issuer,
                audience: defaults.audience,
            },
            session: SessionConfig::default(),
            bcrypt_cost,
            admin_api_key,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.jwt.access_token_expiry
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.jwt.refresh_token_expiry
    }
}
