//! Chat-completions HTTP client.

use agent_core::{async_trait, AgentError, Completion};
use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::ChatConfig;

/// A [`Completion`] backend talking to an Azure OpenAI deployment.
pub struct ChatClient {
    http: Client,
    config: ChatConfig,
}

impl ChatClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ChatConfig) -> Result<Self, AgentError> {
        let http = Client::builder()
            .build()
            .map_err(|e| AgentError::Configuration(format!("failed to create HTTP client: {}", e)))?;

        debug!(
            deployment = %config.deployment,
            api_version = %config.api_version,
            "ChatClient initialized"
        );

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`ChatConfig::from_env`] for the variables consumed.
    pub fn from_env() -> Result<Self, AgentError> {
        Self::new(ChatConfig::from_env()?)
    }

    /// The configuration in use.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Make one chat-completion request.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, AgentError> {
        let request = ChatCompletionRequest {
            messages,
            max_completion_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(self.config.completions_url())
            .header("api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::Network(format!("failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the structured API error message when present.
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(AgentError::Completion(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(AgentError::Completion(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AgentError::Completion(format!("failed to parse response: {}", e)))
    }
}

#[async_trait]
impl Completion for ChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        let messages = vec![ChatMessage::user(prompt)];
        let completion = self.chat_completion(messages).await?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }

        let text = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default();

        if text.is_empty() {
            warn!("empty completion content");
        }

        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "ChatClient"
    }
}
