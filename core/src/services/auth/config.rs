//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Shortest accepted password, in characters
    pub min_password_length: usize,
    /// Longest accepted password, in UTF-8 bytes; bcrypt reads at most 72
    pub max_password_length: usize,
    /// Longest accepted display name, in characters
    pub max_name_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            max_password_length: 72,
            max_name_length: 100,
        }
    }
}
