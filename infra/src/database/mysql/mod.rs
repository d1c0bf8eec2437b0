//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod contact_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use contact_repository_impl::MySqlContactRepository;
pub use user_repository_impl::MySqlUserRepository;

use contacts_core::errors::DomainError;

/// Read a column, reporting a decode failure as an internal error
fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    sqlx::Row::try_get(row, name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}
