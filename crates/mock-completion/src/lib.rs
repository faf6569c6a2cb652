//! Mock completion backends for workflow tests.
//!
//! This crate provides offline implementations of the
//! [`agent_core::Completion`] trait:
//!
//! - [`EchoCompletion`] - Returns the prompt unchanged
//! - [`CannedCompletion`] - Returns scripted responses in order
//! - [`FailingCompletion`] - Always returns an error
//!
//! # Example
//!
//! ```rust
//! use agent_core::Completion;
//! use mock_completion::CannedCompletion;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), agent_core::AgentError> {
//!     let backend = CannedCompletion::new(["{\"category\": \"middle\"}"]);
//!     let response = backend.complete("classify this").await?;
//!     assert_eq!(response, "{\"category\": \"middle\"}");
//!     Ok(())
//! }
//! ```

mod canned;
mod echo;

pub use canned::{CannedCompletion, FailingCompletion};
pub use echo::EchoCompletion;

// Re-export core types for convenience
pub use agent_core::{async_trait, AgentError, Completion};
