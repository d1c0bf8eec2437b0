//! # Infrastructure Layer
//!
//! Concrete implementations of the contact manager's persistence:
//!
//! - **Database**: MySQL connection pool and migrations using SQLx
//! - **Repositories**: `UserRepository` and `ContactRepository` over MySQL

use contacts_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlContactRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        tracing::error!(error = %error, "Infrastructure failure");
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
