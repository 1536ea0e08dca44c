//! Response constructors for contact handlers.
//!
//! Every call builds a fresh response; nothing is cached or shared between
//! requests.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use serde::Serialize;

/// Empty `404 Not Found`, used when a lookup yields nothing.
pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

/// Empty `406 Not Acceptable`, used when a create request has no body.
pub fn not_acceptable() -> HttpResponse {
    HttpResponse::NotAcceptable().finish()
}

/// Empty `415 Unsupported Media Type`, used when a body is not declared as JSON.
pub fn unsupported_media_type() -> HttpResponse {
    HttpResponse::UnsupportedMediaType().finish()
}

/// JSON body with the given status.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

/// `200 OK` with a JSON content type and no body.
pub fn empty_ok() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::json()).finish()
}

#[cfg(test)]
mod tests {
    use actix_web::body::MessageBody;
    use actix_web::http::header::CONTENT_TYPE;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(not_found(), StatusCode::NOT_FOUND)]
    #[case(not_acceptable(), StatusCode::NOT_ACCEPTABLE)]
    #[case(unsupported_media_type(), StatusCode::UNSUPPORTED_MEDIA_TYPE)]
    #[case(empty_ok(), StatusCode::OK)]
    fn empty_responses_have_no_body(#[case] response: HttpResponse, #[case] status: StatusCode) {
        assert_eq!(response.status(), status);
        let bytes = response.into_body().try_into_bytes().expect("sized body");
        assert!(bytes.is_empty());
    }

    #[rstest]
    fn json_sets_status_and_content_type() {
        let response = json(StatusCode::ACCEPTED, &json!({ "id": "c-1" }));

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/json")
        );
    }

    #[rstest]
    fn each_call_builds_an_independent_response() {
        let mut first = not_found();
        first
            .headers_mut()
            .insert(CONTENT_TYPE, actix_web::http::header::HeaderValue::from_static("text/plain"));

        assert!(not_found().headers().get(CONTENT_TYPE).is_none());
    }
}
