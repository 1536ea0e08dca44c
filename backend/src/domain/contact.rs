//! Contact data model.
//!
//! A [`Contact`] is identified by a store-assigned [`ContactId`] and carries
//! three freely mutable fields. Updates overwrite all three fields at once, so
//! each field is optional: a field missing from an update becomes unset.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned contact identifier.
///
/// Any string is accepted when parsing path parameters; identifiers the store
/// never issued simply do not match a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContactId> for String {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

/// The mutable part of a contact: everything except its identifier.
///
/// Used both as the insert candidate and as the overwrite payload for updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Persisted contact.
///
/// ## Invariants
/// - `id` never changes once assigned; [`Contact::overwrite`] replaces only
///   the details.
///
/// # Examples
/// ```
/// use contacts::domain::{Contact, ContactDetails, ContactId};
///
/// let mut contact = Contact::new(
///     ContactId::new("c-1"),
///     ContactDetails {
///         name: Some("Ann".into()),
///         email: Some("a@x.com".into()),
///         phone: Some("555".into()),
///     },
/// );
/// contact.overwrite(ContactDetails {
///     name: Some("Ann2".into()),
///     ..ContactDetails::default()
/// });
/// assert_eq!(contact.id().as_str(), "c-1");
/// assert_eq!(contact.name(), Some("Ann2"));
/// assert_eq!(contact.phone(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    #[serde(flatten)]
    details: ContactDetails,
}

impl Contact {
    /// Build a contact from an identifier and its details.
    pub fn new(id: ContactId, details: ContactDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.details.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.details.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.details.phone.as_deref()
    }

    /// Borrow the mutable fields.
    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    /// Replace name, email, and phone wholesale, keeping the identifier.
    pub fn overwrite(&mut self, details: ContactDetails) {
        self.details = details;
    }
}
