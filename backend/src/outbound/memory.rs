//! In-process contact store.
//!
//! Used when no database is configured and by the HTTP tests. Records are kept
//! in insertion order, which is the order `find_all` and
//! `find_first_by_email` observe.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDetails, ContactId};

/// Contact repository backed by a lock-guarded vector.
///
/// Lookups share a read lock; inserts, saves, and deletes take the write lock
/// for the duration of the single operation.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    records: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Contact>>, ContactRepositoryError> {
        self.records.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Contact>>, ContactRepositoryError> {
        self.records.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> ContactRepositoryError {
    ContactRepositoryError::query("in-memory contact store poisoned")
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_all(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let guard = self.read()?;
        Ok(guard.iter().find(|contact| contact.id() == id).cloned())
    }

    async fn find_first_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let guard = self.read()?;
        Ok(guard
            .iter()
            .find(|contact| contact.email() == Some(email))
            .cloned())
    }

    async fn insert(&self, details: &ContactDetails) -> Result<Contact, ContactRepositoryError> {
        let contact = Contact::new(ContactId::random(), details.clone());
        self.write()?.push(contact.clone());
        Ok(contact)
    }

    async fn save(&self, contact: &Contact) -> Result<Contact, ContactRepositoryError> {
        let mut guard = self.write()?;
        match guard.iter_mut().find(|stored| stored.id() == contact.id()) {
            Some(stored) => *stored = contact.clone(),
            None => guard.push(contact.clone()),
        }
        Ok(contact.clone())
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<(), ContactRepositoryError> {
        self.write()?.retain(|contact| contact.id() != id);
        Ok(())
    }
}
