//! Not-found responder for unmatched paths and methods.

use axum::http::{Method, StatusCode, Uri};

/// Any unmatched request — 404 with an empty body.
pub async fn not_found(method: Method, uri: Uri) -> StatusCode {
    tracing::debug!(%method, %uri, "no route matched");
    StatusCode::NOT_FOUND
}
