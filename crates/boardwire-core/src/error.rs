//! Error types for `Boardwire` core library.

use thiserror::Error;

/// Result type alias using `Boardwire` Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for `Boardwire` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Record decoded as JSON but is not a game stream record
    #[error("Failed to parse NDJSON: {0}")]
    NdjsonParse(String),

    /// Missing credential or unusable API base
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
