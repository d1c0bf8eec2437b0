//! Contact service implementation

use std::sync::Arc;

use contacts_shared::types::{Page, Pagination};
use contacts_shared::utils::validation::MAX_FIELD_LENGTH;
use tracing::{debug, info};

use crate::domain::entities::contact::{Contact, ContactDraft};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::ContactRepository;

/// One page of an owner's contacts
pub type ContactPage = Page<Contact>;

/// Service for contact CRUD, every call scoped by the acting user
pub struct ContactService<C: ContactRepository> {
    contact_repository: Arc<C>,
}

impl<C: ContactRepository> ContactService<C> {
    pub fn new(contact_repository: Arc<C>) -> Self {
        Self { contact_repository }
    }

    /// List the owner's contacts
    ///
    /// # Returns
    ///
    /// The requested page together with the owner's full contact count
    pub async fn list(&self, owner_id: u64, pagination: Pagination) -> DomainResult<ContactPage> {
        let contacts = self
            .contact_repository
            .list_owned(owner_id, pagination.offset(), pagination.limit())
            .await?;
        let total = self.contact_repository.count_owned(owner_id).await?;

        debug!(
            user_id = owner_id,
            page = pagination.page,
            page_size = pagination.page_size,
            total,
            "Listed contacts"
        );

        Ok(Page::new(contacts, total, pagination))
    }

    /// Create a contact owned by the acting user
    pub async fn create(&self, owner_id: u64, draft: ContactDraft) -> DomainResult<Contact> {
        validate_draft(&draft)?;

        let contact = self.contact_repository.create(owner_id, draft).await?;
        info!(user_id = owner_id, contact_id = contact.id, "Contact created");
        Ok(contact)
    }

    /// Fetch a single contact; other owners' contacts are reported as missing
    pub async fn get(&self, owner_id: u64, id: u64) -> DomainResult<Contact> {
        self.contact_repository
            .find_owned(id, owner_id)
            .await?
            .ok_or_else(contact_not_found)
    }

    /// Replace name, email and phone of a contact
    ///
    /// Id and owner are preserved. Fields absent from the request arrive here
    /// as empty strings and overwrite the stored values.
    pub async fn update(&self, owner_id: u64, id: u64, draft: ContactDraft) -> DomainResult<Contact> {
        validate_draft(&draft)?;

        // Existence check first so a missing contact is reported before any write
        self.get(owner_id, id).await?;

        let contact = self
            .contact_repository
            .update_owned(id, owner_id, &draft)
            .await?
            .ok_or_else(contact_not_found)?;

        info!(user_id = owner_id, contact_id = id, "Contact updated");
        Ok(contact)
    }

    /// Delete a contact
    pub async fn delete(&self, owner_id: u64, id: u64) -> DomainResult<()> {
        let affected = self.contact_repository.delete_owned(id, owner_id).await?;
        if affected == 0 {
            return Err(contact_not_found());
        }

        info!(user_id = owner_id, contact_id = id, "Contact deleted");
        Ok(())
    }
}

fn contact_not_found() -> DomainError {
    DomainError::not_found("Contact")
}

fn validate_draft(draft: &ContactDraft) -> DomainResult<()> {
    for (field, value) in [
        ("name", &draft.name),
        ("email", &draft.email),
        ("phone", &draft.phone),
    ] {
        if value.chars().count() > MAX_FIELD_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: field.to_string(),
                max: MAX_FIELD_LENGTH,
            }
            .into());
        }
    }
    Ok(())
}
