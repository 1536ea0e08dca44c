//! HTTP inbound adapter exposing REST endpoints.

pub mod contacts;
pub mod error;
pub mod health;
pub mod responses;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
