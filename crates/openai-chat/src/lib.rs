//! Azure OpenAI chat-completions backend.
//!
//! Implements the [`agent_core::Completion`] trait against an
//! Azure-OpenAI-compatible deployment. Single-turn and stateless: the
//! workflow system keeps no conversation history.

mod api_types;
mod client;
mod config;

pub use api_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use client::ChatClient;
pub use config::ChatConfig;
