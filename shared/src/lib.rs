//! Shared utilities and common types for the contact manager server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and environment loading
//! - Error response structures
//! - Pagination types for list endpoints
//! - Validation helpers (email syntax, log masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, DatabaseConfig, JwtConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::{Page, Pagination};
pub use utils::validation;
