//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request never completed
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be parsed as structured data.
    /// One uniform message regardless of what the parser choked on.
    #[error("response is not valid structured data")]
    MalformedBody,

    /// Server rejected the operation (non-2xx status or success=false)
    #[error("{0}")]
    Rejected(String),

    /// Authentication required
    #[error("authentication required")]
    Unauthorized,

    /// Operation the resource does not support
    #[error("operation not supported for this resource")]
    Unsupported,

    /// Exporter failure
    #[error("export failed: {0}")]
    Export(String),

    /// Session storage I/O failure
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error (session file contents)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Required configuration is absent
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// User-facing message for an error, guaranteed non-empty
///
/// A failure must never surface as a blank notice.
pub fn user_message(error: &ClientError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        "something went wrong".to_string()
    } else {
        message
    }
}
