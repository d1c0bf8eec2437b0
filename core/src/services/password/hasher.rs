use bcrypt::DEFAULT_COST;

use crate::errors::{DomainError, DomainResult};

/// Salted password hashing
///
/// Each call to `hash` uses a fresh salt, so hashing the same password twice
/// yields different strings that both verify.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Hasher using bcrypt's default work factor
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Hasher with an explicit work factor (bcrypt accepts 4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            DomainError::internal("failed to hash password")
        })
    }

    /// Returns `Ok(false)` on mismatch; errors only when the stored hash is malformed
    pub fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| {
            tracing::error!(error = %e, "Stored password hash could not be parsed");
            DomainError::internal("failed to verify password")
        })
    }

    /// `hash` on the blocking thread pool
    pub async fn hash_blocking(&self, plaintext: &str) -> DomainResult<String> {
        let hasher = *self;
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
    }

    /// `verify` on the blocking thread pool
    pub async fn verify_blocking(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        let hasher = *self;
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
    }
}
