//! Social client trait and the Bluesky-backed implementation.

use std::path::Path;

use agent_core::{async_trait, Listing, Message};
use bluesky_client::{BskyClient, Post};
use tracing::debug;

use crate::error::WorkflowError;

/// A resolved account reference.
#[derive(Debug, Clone)]
pub struct ActorRef {
    /// Opaque account identifier, passed back to the client.
    pub id: String,
    /// Account handle.
    pub handle: String,
    /// Display name (falls back to the handle).
    pub display_name: String,
}

/// The social-network operations the workflows need.
///
/// Every operation is fallible and the workflows always check the
/// outcome before proceeding. Abstracted to support scripted
/// implementations in tests.
#[async_trait]
pub trait SocialClient: Send + Sync {
    /// Fetch the following feed as a numbered listing.
    async fn following_feed(&self, limit: usize) -> Result<Listing, WorkflowError>;

    /// Fetch one account's latest posts as a numbered listing.
    async fn author_feed(&self, actor_id: &str, limit: usize) -> Result<Listing, WorkflowError>;

    /// Find an account whose handle matches `term`.
    async fn search_actor(&self, term: &str) -> Result<Option<ActorRef>, WorkflowError>;

    /// Publish a post, optionally with an attached image.
    async fn create_post(&self, text: &str, image: Option<&Path>) -> Result<(), WorkflowError>;

    /// Reply to the post addressed by `target_uri`.
    async fn create_reply(&self, target_uri: &str, text: &str) -> Result<(), WorkflowError>;

    /// Like the post addressed by `target_uri`.
    async fn like(&self, target_uri: &str) -> Result<(), WorkflowError>;
}

/// Number fetched posts into a listing, in feed order.
fn listing_from(posts: Vec<Post>) -> Listing {
    let messages = posts
        .into_iter()
        .enumerate()
        .map(|(idx, post)| {
            Message::new(
                idx + 1,
                post.uri,
                post.author.display().to_string(),
                post.record.text,
                post.indexed_at,
            )
        })
        .collect();
    Listing::new(messages)
}

#[async_trait]
impl SocialClient for BskyClient {
    async fn following_feed(&self, limit: usize) -> Result<Listing, WorkflowError> {
        let posts = self
            .get_timeline(limit)
            .await
            .map_err(|e| WorkflowError::Social(e.to_string()))?;
        debug!(count = posts.len(), "fetched following feed");
        Ok(listing_from(posts))
    }

    async fn author_feed(&self, actor_id: &str, limit: usize) -> Result<Listing, WorkflowError> {
        let posts = self
            .get_author_feed(actor_id, limit)
            .await
            .map_err(|e| WorkflowError::Social(e.to_string()))?;
        debug!(actor = actor_id, count = posts.len(), "fetched author feed");
        Ok(listing_from(posts))
    }

    async fn search_actor(&self, term: &str) -> Result<Option<ActorRef>, WorkflowError> {
        let actors = self
            .search_actors(term)
            .await
            .map_err(|e| WorkflowError::Social(e.to_string()))?;

        // Partial, case-insensitive handle match, first hit wins.
        let needle = term.to_lowercase();
        Ok(actors
            .into_iter()
            .find(|actor| actor.handle.to_lowercase().contains(&needle))
            .map(|actor| ActorRef {
                id: actor.did.clone(),
                display_name: actor.display().to_string(),
                handle: actor.handle,
            }))
    }

    async fn create_post(&self, text: &str, image: Option<&Path>) -> Result<(), WorkflowError> {
        BskyClient::create_post(self, text, image)
            .await
            .map(|_| ())
            .map_err(|e| WorkflowError::Social(e.to_string()))
    }

    async fn create_reply(&self, target_uri: &str, text: &str) -> Result<(), WorkflowError> {
        BskyClient::create_reply(self, target_uri, text)
            .await
            .map(|_| ())
            .map_err(|e| WorkflowError::Social(e.to_string()))
    }

    async fn like(&self, target_uri: &str) -> Result<(), WorkflowError> {
        BskyClient::like(self, target_uri)
            .await
            .map(|_| ())
            .map_err(|e| WorkflowError::Social(e.to_string()))
    }
}
