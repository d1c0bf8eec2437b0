//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - HS256 token issuance for activation and session purposes
//! - Token verification and identity extraction
//! - Bearer header parsing

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
