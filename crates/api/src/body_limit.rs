//! Size cap for JSON request bodies.
//!
//! Only requests whose `Content-Type` is `application/json` are checked;
//! other bodies pass through untouched whatever their size.

use axum::extract::Request;
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Largest accepted JSON request body, in bytes.
pub const JSON_BODY_LIMIT_BYTES: u64 = 100 * 1024;

/// Rejects JSON requests that declare a body over the limit with 413.
pub async fn limit_json_body(request: Request, next: Next) -> Response {
    let headers = request.headers();
    if is_json(headers)
        && declared_length(headers).is_some_and(|len| len > JSON_BODY_LIMIT_BYTES)
    {
        tracing::debug!(uri = %request.uri(), "json body over limit");
        return StatusCode::PAYLOAD_TOO_LARGE.into_response();
    }

    next.run(request).await
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
