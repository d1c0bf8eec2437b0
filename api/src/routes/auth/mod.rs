//! Session token endpoint

pub mod authenticate;

pub use authenticate::authenticate;
