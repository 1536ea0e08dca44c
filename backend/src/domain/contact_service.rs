//! Contact domain service.
//!
//! Implements the contact driving ports on top of a [`ContactRepository`].
//! Each operation is a single repository call; absence is passed through as
//! `None` and repository failures become domain errors.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ContactCommand, ContactQuery, ContactRepository, ContactRepositoryError,
};
use crate::domain::{Contact, ContactDetails, ContactId, Error};

fn map_repository_error(error: ContactRepositoryError) -> Error {
    match error {
        ContactRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("contact repository unavailable: {message}"))
        }
        ContactRepositoryError::Query { message } => {
            Error::internal(format!("contact repository error: {message}"))
        }
    }
}

/// Contact service implementing both read and write driving ports.
#[derive(Clone)]
pub struct ContactService<R> {
    contact_repo: Arc<R>,
}

impl<R> ContactService<R> {
    /// Create a new service over the given repository.
    pub fn new(contact_repo: Arc<R>) -> Self {
        Self { contact_repo }
    }
}

#[async_trait]
impl<R> ContactQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn list_all(&self) -> Result<Vec<Contact>, Error> {
        self.contact_repo
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn get_by_id(&self, id: &ContactId) -> Result<Option<Contact>, Error> {
        self.contact_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Contact>, Error> {
        self.contact_repo
            .find_first_by_email(email)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> ContactCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn insert(&self, details: ContactDetails) -> Result<Contact, Error> {
        self.contact_repo
            .insert(&details)
            .await
            .map_err(map_repository_error)
    }

    // A body-supplied id never reaches this point, so there is nothing to
    // cross-check against `id`.
    async fn update(
        &self,
        id: &ContactId,
        details: ContactDetails,
    ) -> Result<Option<Contact>, Error> {
        let Some(mut existing) = self
            .contact_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        existing.overwrite(details);
        let saved = self
            .contact_repo
            .save(&existing)
            .await
            .map_err(map_repository_error)?;
        Ok(Some(saved))
    }

    async fn delete(&self, id: &ContactId) -> Result<(), Error> {
        self.contact_repo
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
