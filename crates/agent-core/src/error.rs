//! Error types for agent workflow components.

use thiserror::Error;

/// Errors that can occur in agent workflow components.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network-level failure talking to a model backend.
    #[error("network error: {0}")]
    Network(String),

    /// The model backend returned an error or an unusable response.
    #[error("completion failed: {0}")]
    Completion(String),
}
