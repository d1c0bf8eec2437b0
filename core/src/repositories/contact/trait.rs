//! Contact repository trait.
//!
//! Every read and write is scoped by the owning user id: a contact that
//! exists under another owner behaves exactly like a missing one.

use async_trait::async_trait;

use crate::domain::entities::contact::{Contact, ContactDraft};
use crate::errors::DomainError;

/// Repository trait for Contact entity persistence operations
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a contact owned by `owner_id`
    async fn create(&self, owner_id: u64, draft: ContactDraft) -> Result<Contact, DomainError>;

    /// Find a contact by id within the owner's scope
    async fn find_owned(&self, id: u64, owner_id: u64) -> Result<Option<Contact>, DomainError>;

    /// List the owner's contacts ordered by id
    ///
    /// # Arguments
    ///
    /// * `owner_id` - The owning user
    /// * `offset` - Number of rows to skip
    /// * `limit` - Maximum number of rows to return
    async fn list_owned(
        &self,
        owner_id: u64,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Contact>, DomainError>;

    /// Count all contacts belonging to the owner
    async fn count_owned(&self, owner_id: u64) -> Result<u64, DomainError>;

    /// Replace name, email and phone of a contact within the owner's scope
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Contact))` - The updated contact
    /// * `Ok(None)` - No such contact under this owner
    async fn update_owned(
        &self,
        id: u64,
        owner_id: u64,
        draft: &ContactDraft,
    ) -> Result<Option<Contact>, DomainError>;

    /// Delete a contact within the owner's scope, returning the affected row count
    async fn delete_owned(&self, id: u64, owner_id: u64) -> Result<u64, DomainError>;
}
