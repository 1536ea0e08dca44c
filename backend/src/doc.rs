//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contact and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document is
//! served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ContactDetailsSchema, ContactSchema, ErrorCodeSchema, ErrorSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        description = "CRUD interface over a contact store, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::get_contact_by_email,
        crate::inbound::http::contacts::insert_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ContactSchema, ContactDetailsSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "contacts", description = "Contact records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
