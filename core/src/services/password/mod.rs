//! Credential hashing backed by bcrypt

mod hasher;

pub use hasher::PasswordHasher;
