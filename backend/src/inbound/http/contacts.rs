//! Contact HTTP handlers.
//!
//! ```text
//! GET    /contacts
//! GET    /contacts/{id}
//! GET    /contacts/email/{email}
//! POST   /contacts        {"name":"Ann","email":"a@x.com","phone":"555"}
//! PUT    /contacts/{id}   {"name":"Ann2","email":"a@x.com","phone":"555"}
//! DELETE /contacts/{id}
//! ```
//!
//! Absence is answered with empty 404/406 responses built per request. Store
//! failures propagate as [`Error`] and are rendered by the error mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, mime, post, put, web};
use serde_json::json;

use crate::domain::{ContactDetails, ContactId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses;
use crate::inbound::http::schemas::{ContactDetailsSchema, ContactSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Outcome of reading a create or overwrite request body.
#[derive(Debug, PartialEq)]
enum RequestBody {
    /// Empty, whitespace-only, or JSON `null`.
    Absent,
    /// A body was sent with a non-JSON content type.
    Unsupported,
    Present(ContactDetails),
}

/// Whether the request declares `application/json` or a `+json` media type.
fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(media)) => media.subtype() == mime::JSON || media.suffix() == Some(mime::JSON),
        _ => false,
    }
}

fn invalid_body(code: &str, reason: impl Into<String>) -> Error {
    Error::invalid_request("request body is not valid contact JSON").with_details(json!({
        "field": "body",
        "code": code,
        "reason": reason.into(),
    }))
}

/// Read a raw request body as contact details.
///
/// Omitted fields become `None`; an `id` member is ignored. Blank bodies are
/// absent regardless of content type.
fn read_contact_body(req: &HttpRequest, body: &[u8]) -> Result<RequestBody, Error> {
    if body.trim_ascii().is_empty() {
        return Ok(RequestBody::Absent);
    }
    if !is_json(req) {
        return Ok(RequestBody::Unsupported);
    }
    let details = serde_json::from_slice::<Option<ContactDetails>>(body)
        .map_err(|err| invalid_body("invalid_contact_json", err.to_string()))?;
    let Some(details) = details else {
        return Ok(RequestBody::Absent);
    };
    let has_nul = [&details.name, &details.email, &details.phone]
        .into_iter()
        .flatten()
        .any(|value| value.contains('\0'));
    if has_nul {
        return Err(invalid_body(
            "invalid_contact_field",
            "contact fields must not contain NUL characters",
        ));
    }
    Ok(RequestBody::Present(details))
}

/// List every contact.
#[utoipa::path(
    get,
    path = "/contacts",
    responses(
        (status = 200, description = "All contacts", body = [ContactSchema]),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let contacts = state.contacts.list_all().await?;
    Ok(responses::json(StatusCode::OK, &contacts))
}

/// Fetch one contact by id.
#[utoipa::path(
    get,
    path = "/contacts/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact found", body = ContactSchema),
        (status = 404, description = "No contact with this id"),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = ContactId::new(path.into_inner());
    Ok(match state.contacts.get_by_id(&id).await? {
        Some(contact) => responses::json(StatusCode::OK, &contact),
        None => responses::not_found(),
    })
}

/// Fetch the first contact with the given email.
#[utoipa::path(
    get,
    path = "/contacts/email/{email}",
    params(("email" = String, Path, description = "Email address to match exactly")),
    responses(
        (status = 200, description = "Contact found", body = ContactSchema),
        (status = 404, description = "No contact with this email"),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "getContactByEmail"
)]
#[get("/contacts/email/{email}")]
pub async fn get_contact_by_email(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let email = path.into_inner();
    Ok(match state.contacts.get_by_email(&email).await? {
        Some(contact) => responses::json(StatusCode::OK, &contact),
        None => responses::not_found(),
    })
}

/// Create a contact; the store assigns its id.
#[utoipa::path(
    post,
    path = "/contacts",
    request_body = ContactDetailsSchema,
    responses(
        (status = 202, description = "Contact stored", body = ContactSchema),
        (status = 400, description = "Body is not contact JSON", body = ErrorSchema),
        (status = 406, description = "Body missing or empty"),
        (status = 415, description = "Body is not declared as JSON"),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "insertContact"
)]
#[post("/contacts")]
pub async fn insert_contact(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let details = match read_contact_body(&req, &body)? {
        RequestBody::Present(details) => details,
        RequestBody::Absent => return Ok(responses::not_acceptable()),
        RequestBody::Unsupported => return Ok(responses::unsupported_media_type()),
    };
    let saved = state.contacts_command.insert(details).await?;
    Ok(responses::json(StatusCode::ACCEPTED, &saved))
}

/// Overwrite name, email, and phone of an existing contact.
///
/// The path id is authoritative; an id in the body is not compared with it.
#[utoipa::path(
    put,
    path = "/contacts/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    request_body = ContactDetailsSchema,
    responses(
        (status = 202, description = "Contact updated", body = ContactSchema),
        (status = 400, description = "Body is not contact JSON", body = ErrorSchema),
        (status = 404, description = "No contact with this id, or body missing"),
        (status = 415, description = "Body is not declared as JSON"),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let details = match read_contact_body(&req, &body)? {
        RequestBody::Present(details) => details,
        RequestBody::Absent => return Ok(responses::not_found()),
        RequestBody::Unsupported => return Ok(responses::unsupported_media_type()),
    };
    let id = ContactId::new(path.into_inner());
    Ok(
        match state.contacts_command.update(&id, details).await? {
            Some(contact) => responses::json(StatusCode::ACCEPTED, &contact),
            None => responses::not_found(),
        },
    )
}

/// Delete a contact. Succeeds whether or not the id existed.
#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Deletion requested"),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/contacts/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = ContactId::new(path.into_inner());
    state.contacts_command.delete(&id).await?;
    Ok(responses::empty_ok())
}

/// Register every contact handler on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use contacts::inbound::http::contacts;
///
/// let _app = App::new().configure(contacts::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_contacts)
        .service(get_contact_by_email)
        .service(get_contact)
        .service(insert_contact)
        .service(update_contact)
        .service(delete_contact);
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
