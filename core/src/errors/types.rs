//! Domain-specific error types for authentication, tokens and validation
//!
//! The Display text of each variant is the user-facing message; the
//! presentation layer decides the status code and machine-readable code.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. Both produce the same message.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User account is not active")]
    InactiveAccount,

    #[error("User is already activated")]
    AlreadyActive,

    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Invalid or expired activation token")]
    InvalidActivationToken,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signing secret is not configured")]
    ConfigurationMissing,

    #[error("Failed to sign token")]
    SigningFailure,

    #[error("Token is empty")]
    EmptyToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    Expired,

    #[error("Missing or invalid claim: {claim}")]
    ClaimMissing { claim: String },

    #[error("Token cannot be used for this operation")]
    WrongPurpose,

    #[error("Authorization header is required")]
    MissingHeader,

    #[error("Authorization header must use the Bearer scheme")]
    MalformedHeader,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid length: {field} (max: {max})")]
    InvalidLength { field: String, max: usize },
}
