//! Identity lifecycle: registration, activation and authentication

mod service;


pub use service::{IdentityService, RegistrationResult};
