//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_command;
mod contact_query;
mod contact_repository;

#[cfg(test)]
pub use contact_command::MockContactCommand;
pub use contact_command::ContactCommand;
#[cfg(test)]
pub use contact_query::MockContactQuery;
pub use contact_query::ContactQuery;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
