//! Driving port for contact mutations.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDetails, ContactId, Error};

/// Driving port for creating, updating, and deleting contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Persist a new contact; the store assigns its id.
    async fn insert(&self, details: ContactDetails) -> Result<Contact, Error>;

    /// Overwrite name, email, and phone of an existing contact.
    ///
    /// Returns `Ok(None)` without writing anything when `id` is unknown.
    async fn update(&self, id: &ContactId, details: ContactDetails)
    -> Result<Option<Contact>, Error>;

    /// Delete by id whether or not the contact exists.
    async fn delete(&self, id: &ContactId) -> Result<(), Error>;
}
