//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT secrets, token lifetimes, session cookies and the admin key
//! - `booking` - pricing and save timeout for bookings
//! - `database` - MySQL connection pool settings
//! - `environment` - environment detection
//! - `server` - HTTP bind address and CORS

pub mod auth;
pub mod booking;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, SessionConfig};
pub use booking::BookingConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Booking pricing and timeouts
    #[serde(default)]
    pub booking: BookingConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            booking: BookingConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Values not present in the environment fall back to development defaults.
    /// Production always issues `Secure` cookies.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut auth = AuthConfig::from_env();
        if environment.is_production() {
            auth.session.secure = true;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth,
            booking: BookingConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }

    /// Check that the configuration is safe to run with
    ///
    /// Production must not run with the built-in development secrets.
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET and JWT_REFRESH_SECRET must be set in production".to_string());
        }
        if self.auth.jwt.secret == self.auth.jwt.refresh_secret {
            return Err("Access and refresh tokens must be signed with different secrets".to_string());
        }
        Ok(())
    }
}
