//! Driving port for contact read operations.
//!
//! Lookups return `Ok(None)` when nothing matches; adapters decide how to
//! present absence. `Err` is reserved for store failures.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, Error};

/// Driving port for contact read operations.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use contacts::domain::ContactService;
/// use contacts::domain::ports::ContactQuery;
/// use contacts::outbound::memory::InMemoryContactRepository;
///
/// # async fn example() -> Result<(), contacts::domain::Error> {
/// let service = ContactService::new(Arc::new(InMemoryContactRepository::new()));
/// assert!(service.list_all().await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Every stored contact.
    async fn list_all(&self) -> Result<Vec<Contact>, Error>;

    /// The contact with the given id, if any.
    async fn get_by_id(&self, id: &ContactId) -> Result<Option<Contact>, Error>;

    /// The first contact with the given email, if any.
    async fn get_by_email(&self, email: &str) -> Result<Option<Contact>, Error>;
}
