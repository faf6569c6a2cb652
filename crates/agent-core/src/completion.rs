//! The completion trait implemented by model backends.

use async_trait::async_trait;

use crate::error::AgentError;

/// An opaque text-completion capability.
///
/// Implementations wrap a model endpoint. The contract is arbitrary
/// text in, arbitrary text out: callers must never assume the response
/// is valid structured data and should recover via [`crate::extract`].
#[async_trait]
pub trait Completion: Send + Sync {
    /// Send one prompt and return the raw response text.
    async fn complete(&self, prompt: &str) -> Result<String, AgentError>;

    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;
}
