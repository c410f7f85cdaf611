//! Proxy error types and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors raised while serving a request.
///
/// Upstream non-success statuses are not errors: they are relayed verbatim.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Inbound request could not be used (e.g. malformed JSON body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Network-level failure reaching the remote API.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Client construction error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProxyError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
