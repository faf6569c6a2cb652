//! Configuration for the chat-completions client.

use std::env;

use agent_core::AgentError;

/// Default API version for the Azure OpenAI endpoint.
pub const DEFAULT_API_VERSION: &str = "2024-12-01-preview";

/// Configuration for [`crate::ChatClient`].
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Endpoint base URL (e.g. "https://example.openai.azure.com").
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: String,

    /// Deployment (model) name.
    pub deployment: String,

    /// API version query parameter.
    pub api_version: String,

    /// Maximum tokens for a response.
    pub max_tokens: Option<u32>,

    /// Temperature for generation.
    pub temperature: Option<f32>,
}

impl ChatConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ENDPOINT_URL` - Endpoint base URL
    /// - `AZURE_OPENAI_API_KEY` - API key
    /// - `GPT4O_DEPLOYMENT_NAME` - Deployment name
    ///
    /// Optional environment variables:
    /// - `AZURE_OPENAI_API_VERSION` - API version (default: 2024-12-01-preview)
    /// - `CHAT_MAX_TOKENS` - Max tokens (default: 500)
    /// - `CHAT_TEMPERATURE` - Temperature (default: unset, endpoint default)
    pub fn from_env() -> Result<Self, AgentError> {
        let endpoint = env::var("ENDPOINT_URL")
            .map_err(|_| AgentError::Configuration("ENDPOINT_URL not set".to_string()))?;

        let api_key = env::var("AZURE_OPENAI_API_KEY")
            .map_err(|_| AgentError::Configuration("AZURE_OPENAI_API_KEY not set".to_string()))?;

        let deployment = env::var("GPT4O_DEPLOYMENT_NAME").map_err(|_| {
            AgentError::Configuration("GPT4O_DEPLOYMENT_NAME not set".to_string())
        })?;

        let api_version = env::var("AZURE_OPENAI_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let max_tokens = match env::var("CHAT_MAX_TOKENS") {
            Ok(raw) => Some(raw.parse::<u32>().map_err(|_| {
                AgentError::Configuration(format!("invalid CHAT_MAX_TOKENS: {}", raw))
            })?),
            Err(_) => Some(500),
        };

        let temperature = match env::var("CHAT_TEMPERATURE") {
            Ok(raw) => Some(raw.parse::<f32>().map_err(|_| {
                AgentError::Configuration(format!("invalid CHAT_TEMPERATURE: {}", raw))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            endpoint,
            api_key,
            deployment,
            api_version,
            max_tokens,
            temperature,
        })
    }

    /// The chat-completions URL for this deployment.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChatConfig {
        ChatConfig {
            endpoint: "https://example.openai.azure.com/".to_string(),
            api_key: "key".to_string(),
            deployment: "gpt-4o-mini".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            max_tokens: Some(500),
            temperature: None,
        }
    }

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let url = sample().completions_url();
        assert_eq!(
            url,
            "https://example.openai.azure.com/openai/deployments/gpt-4o-mini/chat/completions?api-version=2024-12-01-preview"
        );
    }
}
