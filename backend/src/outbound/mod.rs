//! Outbound adapters implementing the contact store port.

pub mod memory;
pub mod persistence;
