//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn read_error_response(error: Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");
    (status, header, payload)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("contact repository error: relation missing")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "sql": "select" }));

    let (status, header, payload) = read_error_response(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("request body is not valid contact JSON")
        .with_trace_id(expected_trace_id)
        .with_details(json!({ "field": "body" }));

    let (status, _, payload) = read_error_response(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload.message(), "request body is not valid contact JSON");
    assert_eq!(payload.details(), Some(&json!({ "field": "body" })));
}

#[rstest]
#[actix_web::test]
async fn missing_trace_id_omits_header() {
    let (_, header, payload) = read_error_response(Error::service_unavailable("down")).await;

    assert!(header.is_none());
    assert_eq!(payload.code(), ErrorCode::ServiceUnavailable);
}
