//! Owner-scoped contact management

mod service;


pub use service::{ContactPage, ContactService};
