//! Repository interfaces for data persistence.
//!
//! Each repository has an async trait implemented by the MySQL layer in
//! `contacts_infra` and an in-memory mock used by unit and API tests.

pub mod contact;
pub mod user;

pub use contact::{ContactRepository, MockContactRepository};
pub use user::{MockUserRepository, UserRepository};
