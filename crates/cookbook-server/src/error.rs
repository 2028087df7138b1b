//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No page at the given path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Listener could not be bound or served.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Host and port do not form a socket address.
    #[error("Invalid address {0}")]
    InvalidAddress(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::Io(_) | Self::InvalidAddress(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
