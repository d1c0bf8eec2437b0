//! User entity representing a registered account.

use serde::{Deserialize, Serialize};

/// User entity representing a registered account
///
/// Accounts start inactive and can authenticate only after activation.
/// The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Login email, unique across all users
    pub email: String,

    /// Bcrypt hash of the user's password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Whether the account has been activated
    pub active: bool,
}

impl User {
    /// Creates a user record as read back from storage
    pub fn new(id: u64, email: impl Into<String>, password_hash: impl Into<String>, active: bool) -> Self {
        Self {
            id,
            email: email.into(),
            password_hash: password_hash.into(),
            active,
        }
    }

    /// Marks the account as active
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Checks if the account can sign in
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Data required to insert a new user; the id is assigned on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Builds the stored entity once an id is known. New users are inactive.
    pub fn into_user(self, id: u64) -> User {
        User::new(id, self.email, self.password_hash, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_inactive() {
        let user = NewUser::new("a@x.com", "$2b$hash").into_user(7);

        assert_eq!(user.id, 7);
        assert_eq!(user.email, "a@x.com");
        assert!(!user.is_active());
    }

    #[test]
    fn test_activate() {
        let mut user = User::new(1, "a@x.com", "hash", false);
        user.activate();
        assert!(user.is_active());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(1, "a@x.com", "secret-hash", true);
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["active"], true);
    }
}
