//! Domain primitives, ports, and services.
//!
//! Purpose: define the contact entity and the service that maps each contact
//! operation onto a single store call. Nothing here knows about HTTP or
//! PostgreSQL; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - Contact, ContactId, ContactDetails — the persisted entity.
//! - ContactService — implementation of the contact driving ports.
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - TraceId — request-scoped correlation identifier.

pub mod contact;
pub mod contact_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::contact::{Contact, ContactDetails, ContactId};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
