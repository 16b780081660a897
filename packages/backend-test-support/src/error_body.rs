//! Assertions for the backend's JSON error responses.

use actix_web::http::header::{HeaderMap, HeaderName, CONTENT_TYPE, RETRY_AFTER, WWW_AUTHENTICATE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the error body the backend renders.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorBodyLike {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
    pub code: String,
    pub trace_id: String,
}

/// Check one error response against the contract and return the parsed body.
///
/// Verifies status, `application/json` content type, `code`, exact `message`,
/// that `trace_id` equals the `x-trace-id` header, and the per-status headers
/// (`WWW-Authenticate: Bearer` on 401 only, `Retry-After` on 503 only).
pub fn assert_error_body(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status, "unexpected status");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "error responses must be application/json (got {content_type})"
    );

    let parsed: ErrorBodyLike = serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "error body is not the expected shape: {e}; body={}",
            String::from_utf8_lossy(body)
        )
    });

    assert_eq!(parsed.code, expected_code, "unexpected error code");
    assert_eq!(parsed.message, expected_message, "unexpected message");

    let trace_header = headers
        .get(HeaderName::from_static("x-trace-id"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or_else(|| panic!("x-trace-id header missing"));
    assert!(!trace_header.is_empty(), "x-trace-id header is empty");
    assert_eq!(parsed.trace_id, trace_header, "body trace_id must match header");

    if status == StatusCode::UNAUTHORIZED {
        let www = headers
            .get(WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(www, "Bearer", "401 responses must carry WWW-Authenticate: Bearer");
    } else {
        assert!(
            headers.get(WWW_AUTHENTICATE).is_none(),
            "WWW-Authenticate only belongs on 401"
        );
    }

    if status == StatusCode::SERVICE_UNAVAILABLE {
        assert!(headers.get(RETRY_AFTER).is_some(), "503 must carry Retry-After");
    } else {
        assert!(headers.get(RETRY_AFTER).is_none(), "Retry-After only belongs on 503");
    }

    parsed
}
