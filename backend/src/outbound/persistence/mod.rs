//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Adapters translate between Diesel rows and domain types and nothing else.
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module. Connections come from a `bb8` pool via `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use contacts::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), contacts::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/contacts")).await?;
//! let repo = DieselContactRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_contact_repository;
mod diesel_error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
