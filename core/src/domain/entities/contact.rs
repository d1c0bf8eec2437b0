//! Contact entity owned by exactly one user.

use serde::{Deserialize, Serialize};

/// A single contact entry in a user's address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Display name
    pub name: String,

    /// Email address, not required to be unique
    pub email: String,

    /// Phone number, free text
    pub phone: String,

    /// Owning user; never changes after creation
    pub user_id: u64,
}

impl Contact {
    /// Builds a contact from a draft for the given owner
    pub fn from_draft(id: u64, user_id: u64, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            user_id,
        }
    }

    /// Replaces the editable fields, keeping id and owner
    pub fn apply(&mut self, draft: &ContactDraft) {
        self.name = draft.name.clone();
        self.email = draft.email.clone();
        self.phone = draft.phone.clone();
    }

    pub fn is_owned_by(&self, user_id: u64) -> bool {
        self.user_id == user_id
    }
}

/// Client-supplied contact fields used for create and full replacement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
