//! Core trait and types for the Skylark agent workflow system.
//!
//! This crate provides the shared interface used by every workflow
//! component:
//!
//! - [`Completion`] - The trait that model backends implement
//! - [`Profile`] / [`ProfileSet`] - Immutable persona configuration
//! - [`Message`] / [`Listing`] - Social posts surfaced to a workflow
//! - [`Classification`] / [`Leaning`] - Political-leaning labels
//! - [`CandidateReply`] - Draft text moving through the pipeline
//! - [`extract`] - Fence stripping and resilient JSON extraction
//! - [`text`] - Outbound length normalization
//!
//! # Example
//!
//! ```rust
//! use agent_core::{async_trait, AgentError, Completion};
//!
//! struct FixedBackend;
//!
//! #[async_trait]
//! impl Completion for FixedBackend {
//!     async fn complete(&self, _prompt: &str) -> Result<String, AgentError> {
//!         Ok("{\"formatted_message\": \"Hello!\"}".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FixedBackend"
//!     }
//! }
//! ```

mod classify;
mod completion;
mod error;
pub mod extract;
mod message;
mod profile;
pub mod text;

pub use classify::{looks_like_label, Classification, Leaning, ALLOWED_LABELS};
pub use completion::Completion;
pub use error::AgentError;
pub use extract::{sanitize, Extraction};
pub use message::{CandidateReply, Listing, Message, Provenance};
pub use profile::{Capability, Profile, ProfileSet};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
