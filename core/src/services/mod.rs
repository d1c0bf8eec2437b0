//! Business services containing domain logic and use cases.

pub mod contact;
pub mod identity;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use contact::{ContactPage, ContactService};
pub use identity::{IdentityService, RegistrationResult};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
