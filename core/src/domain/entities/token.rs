//! Token claims for JWT-based activation and session tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default token validity window (24 hours)
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// What a token may be used for
///
/// Activation tokens are handed out at registration and accepted only by the
/// activation endpoint; session tokens are returned by authentication and
/// accepted only on protected routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPurpose {
    Activation,
    Session,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::Activation => "activation",
            TokenPurpose::Session => "session",
        }
    }
}

impl std::fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the user the token speaks for
    pub user_id: u64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Intended use of the token
    pub purpose: TokenPurpose,
}

impl Claims {
    /// Creates claims expiring `ttl` from now
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's identifier
    /// * `purpose` - Where the token will be accepted
    /// * `ttl` - Validity window
    pub fn new(user_id: u64, purpose: TokenPurpose, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            purpose,
        }
    }
}
