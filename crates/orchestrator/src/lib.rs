//! Human-in-the-loop workflow engine for Skylark agents.
//!
//! This crate coordinates the reply, post, and search workflows: every
//! externally visible action is generated by an agent profile, checked
//! by the analyst profile, clamped to the character budget, and finally
//! approved (or overridden) by the human operator before anything is
//! dispatched to the social network.
//!
//! # Architecture
//!
//! ```text
//! fetched listing (bluesky-client)
//!          ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │                     ORCHESTRATOR                        │
//! │                                                         │
//! │  1. Analyze listing (bulk category/subject/style)       │
//! │         ↓                                               │
//! │  2. Operator selects one message (or skips)             │
//! │         ↓                                               │
//! │  3. Optional like; optional reply                       │
//! │         ↓                                               │
//! │  4. Agent path: classify → route to responder/mediator  │
//! │     → generate → validate → clamp to budget             │
//! │         ↓                                               │
//! │  5. Approval loop: accept / regenerate / manual text    │
//! │         ↓                                               │
//! │  6. Final confirmation → create reply → report outcome  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed model reply never aborts a workflow: parsing degrades
//! through [`agent_core::extract`] and the operator keeps control.

pub mod analysis;
pub mod approval;
pub mod classifier;
mod console;
mod error;
pub mod generator;
mod social;
pub mod validator;
pub mod workflows;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::WorkflowError;
pub use social::{ActorRef, SocialClient};
pub use workflows::Toolkit;

// Re-export commonly used types from dependencies
pub use agent_core::{CandidateReply, Classification, Leaning, Listing, Message, ProfileSet};
