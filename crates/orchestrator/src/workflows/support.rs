//! Scripted social client for workflow tests.

use std::path::Path;
use std::sync::Mutex;

use agent_core::{async_trait, Listing};

use crate::error::WorkflowError;
use crate::social::{ActorRef, SocialClient};

/// Records every social-network call and replays scripted data.
#[derive(Debug, Default)]
pub(crate) struct RecordingSocial {
    following: Listing,
    author: Listing,
    actor: Option<ActorRef>,
    fail_reply: bool,
    actions: Mutex<Vec<String>>,
}

impl RecordingSocial {
    pub(crate) fn with_following(mut self, listing: Listing) -> Self {
        self.following = listing;
        self
    }

    pub(crate) fn with_author_feed(mut self, listing: Listing) -> Self {
        self.author = listing;
        self
    }

    pub(crate) fn with_actor(mut self, actor: ActorRef) -> Self {
        self.actor = Some(actor);
        self
    }

    pub(crate) fn with_failing_reply(mut self) -> Self {
        self.fail_reply = true;
        self
    }

    pub(crate) fn actions(&self) -> Vec<String> {
        self.actions.lock().expect("actions lock").clone()
    }

    pub(crate) fn saw(&self, needle: &str) -> bool {
        self.actions().iter().any(|a| a.contains(needle))
    }

    fn record(&self, action: String) {
        self.actions.lock().expect("actions lock").push(action);
    }
}

#[async_trait]
impl SocialClient for RecordingSocial {
    async fn following_feed(&self, limit: usize) -> Result<Listing, WorkflowError> {
        self.record(format!("following_feed:{}", limit));
        Ok(self.following.clone())
    }

    async fn author_feed(&self, actor_id: &str, limit: usize) -> Result<Listing, WorkflowError> {
        self.record(format!("author_feed:{}:{}", actor_id, limit));
        Ok(self.author.clone())
    }

    async fn search_actor(&self, term: &str) -> Result<Option<ActorRef>, WorkflowError> {
        self.record(format!("search_actor:{}", term));
        Ok(self.actor.clone())
    }

    async fn create_post(&self, text: &str, image: Option<&Path>) -> Result<(), WorkflowError> {
        self.record(format!(
            "post:{}:{}",
            text,
            image.map(|p| p.display().to_string()).unwrap_or_default()
        ));
        Ok(())
    }

    async fn create_reply(&self, target_uri: &str, text: &str) -> Result<(), WorkflowError> {
        self.record(format!("reply:{}:{}", target_uri, text));
        if self.fail_reply {
            return Err(WorkflowError::Social(
                "record creation rejected upstream".to_string(),
            ));
        }
        Ok(())
    }

    async fn like(&self, target_uri: &str) -> Result<(), WorkflowError> {
        self.record(format!("like:{}", target_uri));
        Ok(())
    }
}
