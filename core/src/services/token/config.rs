//! Configuration for the token service

use chrono::Duration;
use contacts_shared::config::JwtConfig;

use crate::domain::entities::token::TOKEN_VALIDITY_HOURS;

/// Configuration for the token service
///
/// Built once at startup and handed to `TokenService::new` by value.
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Validity window applied to every issued token
    pub token_ttl: Duration,
}

impl TokenServiceConfig {
    /// Creates a configuration with the default 24 hour validity window
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl: Duration::hours(TOKEN_VALIDITY_HOURS),
        }
    }

    /// Sets the token validity window
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self::new(config.secret.clone()).with_ttl(Duration::hours(config.token_ttl_hours))
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
