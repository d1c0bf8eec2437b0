pub mod auth;
pub mod contacts;
pub mod error;
pub mod users;

pub use error::{ErrorResponse, ErrorResponseExt};
