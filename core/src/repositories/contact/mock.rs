//! In-memory implementation of ContactRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::contact::{Contact, ContactDraft};
use crate::errors::DomainError;

use super::trait_::ContactRepository;

/// Mock contact repository for testing
///
/// Contacts are kept in a `BTreeMap` so listing is ordered by id like the
/// MySQL implementation. `set_unavailable(true)` makes every call fail with
/// an internal error, to exercise storage failure paths.
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<RwLock<BTreeMap<u64, Contact>>>,
    next_id: Arc<AtomicU64>,
    unavailable: Arc<AtomicBool>,
}

impl MockContactRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Simulate a storage outage
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::internal("contact store unavailable"));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, owner_id: u64, draft: ContactDraft) -> Result<Contact, DomainError> {
        self.check_available()?;
        let mut contacts = self.contacts.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let contact = Contact::from_draft(id, owner_id, draft);
        contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn find_owned(&self, id: u64, owner_id: u64) -> Result<Option<Contact>, DomainError> {
        self.check_available()?;
        let contacts = self.contacts.read().await;
        Ok(contacts
            .get(&id)
            .filter(|c| c.is_owned_by(owner_id))
            .cloned())
    }

    async fn list_owned(
        &self,
        owner_id: u64,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Contact>, DomainError> {
        self.check_available()?;
        let contacts = self.contacts.read().await;
        Ok(contacts
            .values()
            .filter(|c| c.is_owned_by(owner_id))
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count_owned(&self, owner_id: u64) -> Result<u64, DomainError> {
        self.check_available()?;
        let contacts = self.contacts.read().await;
        Ok(contacts.values().filter(|c| c.is_owned_by(owner_id)).count() as u64)
    }

    async fn update_owned(
        &self,
        id: u64,
        owner_id: u64,
        draft: &ContactDraft,
    ) -> Result<Option<Contact>, DomainError> {
        self.check_available()?;
        let mut contacts = self.contacts.write().await;

        match contacts.get_mut(&id) {
            Some(contact) if contact.is_owned_by(owner_id) => {
                contact.apply(draft);
                Ok(Some(contact.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_owned(&self, id: u64, owner_id: u64) -> Result<u64, DomainError> {
        self.check_available()?;
        let mut contacts = self.contacts.write().await;

        let owned = contacts.get(&id).map_or(false, |c| c.is_owned_by(owner_id));
        if owned {
            contacts.remove(&id);
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ContactDraft {
        ContactDraft::new(name, format!("{}@x.com", name), "555")
    }

    #[tokio::test]
    async fn test_scoped_lookup() {
        let repo = MockContactRepository::new();
        let contact = repo.create(1, draft("bob")).await.unwrap();

        assert!(repo.find_owned(contact.id, 1).await.unwrap().is_some());
        assert!(repo.find_owned(contact.id, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_pages_in_id_order() {
        let repo = MockContactRepository::new();
        for name in ["a", "b", "c", "d"] {
            repo.create(1, draft(name)).await.unwrap();
        }
        repo.create(2, draft("other")).await.unwrap();

        let page = repo.list_owned(1, 1, 2).await.unwrap();
        let names: Vec<_> = page.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(repo.count_owned(1).await.unwrap(), 4);
        assert_eq!(repo.count_owned(2).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_respect_owner() {
        let repo = MockContactRepository::new();
        let contact = repo.create(1, draft("bob")).await.unwrap();

        assert!(repo.update_owned(contact.id, 2, &draft("eve")).await.unwrap().is_none());
        assert_eq!(repo.delete_owned(contact.id, 2).await.unwrap(), 0);

        let updated = repo.update_owned(contact.id, 1, &draft("rob")).await.unwrap().unwrap();
        assert_eq!(updated.name, "rob");
        assert_eq!(updated.user_id, 1);

        assert_eq!(repo.delete_owned(contact.id, 1).await.unwrap(), 1);
        assert_eq!(repo.delete_owned(contact.id, 1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let repo = MockContactRepository::new();
        repo.set_unavailable(true);

        assert!(matches!(
            repo.count_owned(1).await,
            Err(DomainError::Internal { .. })
        ));
    }
}
