//! Echo completion - returns the prompt unchanged.

use agent_core::{async_trait, AgentError, Completion};

/// A completion backend that echoes prompts back.
///
/// Useful for exercising prompt plumbing without any model.
#[derive(Debug, Clone, Default)]
pub struct EchoCompletion;

impl EchoCompletion {
    /// Create a new echo backend.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Completion for EchoCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        Ok(prompt.to_string())
    }

    fn name(&self) -> &str {
        "EchoCompletion"
    }
}
