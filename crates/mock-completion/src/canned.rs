//! Canned completion - scripted responses in order.

use std::collections::VecDeque;
use std::sync::Mutex;

use agent_core::{async_trait, AgentError, Completion};

/// A completion backend that returns pre-scripted responses in order.
///
/// Once the script is exhausted, further calls return an empty string
/// (workflow parsing treats that as a degraded response, the same as a
/// model replying with nothing useful). Prompts are recorded for
/// assertions.
#[derive(Debug, Default)]
pub struct CannedCompletion {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl CannedCompletion {
    /// Create a backend that replies with `responses`, in order.
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// The prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt lock").clone()
    }

    /// Number of scripted responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.lock().expect("response lock").len()
    }
}

#[async_trait]
impl Completion for CannedCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        self.prompts
            .lock()
            .expect("prompt lock")
            .push(prompt.to_string());

        let next = self.responses.lock().expect("response lock").pop_front();
        Ok(next.unwrap_or_default())
    }

    fn name(&self) -> &str {
        "CannedCompletion"
    }
}

/// A completion backend whose every call fails.
///
/// Exercises transport-failure paths without a network.
#[derive(Debug, Clone)]
pub struct FailingCompletion {
    message: String,
}

impl FailingCompletion {
    /// Create a backend failing with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingCompletion {
    fn default() -> Self {
        Self::new("simulated backend failure")
    }
}

#[async_trait]
impl Completion for FailingCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, AgentError> {
        Err(AgentError::Completion(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingCompletion"
    }
}
