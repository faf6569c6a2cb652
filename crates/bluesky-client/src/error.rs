//! Error types for the Bluesky client.

use thiserror::Error;

/// Errors that can occur when talking to the ATProto service.
#[derive(Debug, Error)]
pub enum BskyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error response from the service.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Login failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A referenced post could not be found.
    #[error("post not found: {0}")]
    PostNotFound(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Local file access failed (image uploads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
