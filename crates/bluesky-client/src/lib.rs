//! ATProto XRPC client for Bluesky.
//!
//! Thin typed wrappers over the handful of XRPC endpoints the workflow
//! system needs: session creation, timeline and author feeds, actor
//! search, record creation (posts, replies, likes), and blob upload
//! for image embeds.
//!
//! Post URIs are treated as opaque handles throughout: they are fetched
//! from the network and passed back unmodified.

mod client;
mod config;
mod error;
mod types;

pub use client::BskyClient;
pub use config::BskyConfig;
pub use error::BskyError;
pub use types::{Actor, FeedItem, ImageEmbed, Post, PostRecord, ReplyRef, Session, StrongRef};
