//! Port for contact persistence.
//!
//! This is the store collaborator the contact service composes with. Adapters
//! own identifier generation and record ordering.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDetails, ContactId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "contact repository query failed: {message}",
    }
}

/// Port for reading and writing contact records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Every stored contact in store order.
    async fn find_all(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Find a contact by id.
    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Find the first contact with a matching email, using store order when
    /// several match.
    async fn find_first_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Persist a new contact, assigning it a fresh id.
    async fn insert(&self, details: &ContactDetails) -> Result<Contact, ContactRepositoryError>;

    /// Persist an existing contact, overwriting the stored fields.
    async fn save(&self, contact: &Contact) -> Result<Contact, ContactRepositoryError>;

    /// Remove the contact with the given id. Missing ids are not an error.
    async fn delete_by_id(&self, id: &ContactId) -> Result<(), ContactRepositoryError>;
}
