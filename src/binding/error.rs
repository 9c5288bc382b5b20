//! Binding failures and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors produced by the binding step, surfaced to the client as HTTP 400.
///
/// Route and method mismatches (404 / 405) are handled by the router before
/// binding is ever reached.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// A required query parameter was absent.
    #[error("missing required query parameter `{0}`")]
    MissingParameter(String),

    /// A required request cookie was absent.
    #[error("missing required cookie `{0}`")]
    MissingCookie(String),

    /// A parameter declared as integer carried a non-numeric value.
    #[error("query parameter `{name}` is not a valid integer: `{value}`")]
    InvalidInteger { name: String, value: String },
}

impl IntoResponse for BindError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request binding failed");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
