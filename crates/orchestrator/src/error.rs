//! Error types for workflow orchestration.

use agent_core::AgentError;
use thiserror::Error;

/// Errors that can abort a workflow step.
///
/// Malformed model output is deliberately absent here: it is always
/// recovered locally and never surfaces as an error.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The operator console is closed (EOF on stdin).
    #[error("console input unavailable")]
    ConsoleClosed,

    /// A completion backend call failed.
    #[error("completion backend: {0}")]
    Agent(#[from] AgentError),

    /// A social-network call failed.
    #[error("social client: {0}")]
    Social(String),
}
