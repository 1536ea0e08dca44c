//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on the contact
//! driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactCommand, ContactQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactQuery>,
    pub contacts_command: Arc<dyn ContactCommand>,
}

impl HttpState {
    /// Construct state from separate read and write ports.
    pub fn new(contacts: Arc<dyn ContactQuery>, contacts_command: Arc<dyn ContactCommand>) -> Self {
        Self {
            contacts,
            contacts_command,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use contacts::domain::ContactService;
    /// use contacts::inbound::http::state::HttpState;
    /// use contacts::outbound::memory::InMemoryContactRepository;
    ///
    /// let service = ContactService::new(Arc::new(InMemoryContactRepository::new()));
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _query = state.contacts.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ContactQuery + ContactCommand + 'static,
    {
        Self {
            contacts: service.clone(),
            contacts_command: service,
        }
    }
}
