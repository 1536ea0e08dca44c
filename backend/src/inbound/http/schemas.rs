//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their JSON
//! shape so documentation concerns stay in the inbound adapter.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body could not be interpreted.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The contact store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "service_unavailable")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "contact repository unavailable: connection refused")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Contact`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Contact)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactSchema {
    /// Store-assigned identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Ann")]
    name: Option<String>,
    #[schema(example = "a@x.com")]
    email: Option<String>,
    #[schema(example = "555")]
    phone: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ContactDetails`], the create and
/// overwrite payload.
///
/// Omitted fields are stored as `null`. An `id` member is ignored.
#[derive(ToSchema)]
#[schema(as = crate::domain::ContactDetails)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactDetailsSchema {
    #[schema(example = "Ann")]
    name: Option<String>,
    #[schema(example = "a@x.com")]
    email: Option<String>,
    #[schema(example = "555")]
    phone: Option<String>,
}
