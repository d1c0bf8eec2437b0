//! Domain entities representing core business objects.

pub mod contact;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use contact::{Contact, ContactDraft};
pub use token::{Claims, TokenPurpose, TOKEN_VALIDITY_HOURS};
pub use user::{NewUser, User};
