//! # Contact Manager Core
//!
//! Core business logic and domain layer for the contact manager backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Contact, ContactDraft, NewUser, TokenPurpose, User};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{ContactRepository, MockContactRepository, MockUserRepository, UserRepository};
pub use services::{
    ContactPage, ContactService, IdentityService, PasswordHasher, RegistrationResult,
    TokenService, TokenServiceConfig,
};
