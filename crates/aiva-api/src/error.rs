//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Request-level API errors.
///
/// Both variants carry the user-facing message; the underlying cause is
/// logged where the error is raised.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was absent from the request body (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// The AI provider call failed or returned unusable content (HTTP 500).
    #[error("{0}")]
    Provider(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
