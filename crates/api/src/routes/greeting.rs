//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed greeting returned by `GET /`.
pub const GREETING: &str = "This is from Node.js Backend, Hii Pintu";

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub response: &'static str,
}

/// GET / — returns the static greeting.
///
/// The request body is never read, so any payload (valid JSON or not)
/// is accepted and ignored.
pub async fn get() -> Json<GreetingResponse> {
    Json(GreetingResponse { response: GREETING })
}
