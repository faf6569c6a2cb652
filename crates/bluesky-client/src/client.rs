//! Bluesky XRPC HTTP client.

use std::path::Path;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::BskyConfig;
use crate::error::BskyError;
use crate::types::{
    Actor, ActorSearchResponse, CreateRecordRequest, CreateRecordResponse, FeedResponse,
    ImageEmbed, LikeRecord, Post, PostRecord, PostsResponse, ReplyRef, Session,
    UploadBlobResponse,
};

/// Request timeout for all XRPC calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated client for a Bluesky/ATProto service.
pub struct BskyClient {
    http: Client,
    config: BskyConfig,
    session: Session,
}

impl BskyClient {
    /// Log in and return an authenticated client.
    pub async fn login(config: BskyConfig) -> Result<Self, BskyError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let body = serde_json::json!({
            "identifier": config.identifier,
            "password": config.password,
        });

        let response = http
            .post(config.xrpc_url("com.atproto.server.createSession"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(BskyError::Auth(format!("({}) {}", status.as_u16(), message)));
        }

        let session: Session = response.json().await?;
        info!(handle = %session.handle, "logged in to {}", config.service_url);

        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// The active session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the latest posts from accounts the user is following.
    pub async fn get_timeline(&self, limit: usize) -> Result<Vec<Post>, BskyError> {
        let response: FeedResponse = self
            .get_json(
                "app.bsky.feed.getTimeline",
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(response.feed.into_iter().map(|item| item.post).collect())
    }

    /// Fetch the latest posts authored by one actor (handle or DID).
    pub async fn get_author_feed(&self, actor: &str, limit: usize) -> Result<Vec<Post>, BskyError> {
        let response: FeedResponse = self
            .get_json(
                "app.bsky.feed.getAuthorFeed",
                &[("actor", actor.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(response.feed.into_iter().map(|item| item.post).collect())
    }

    /// Search for actors matching a term.
    pub async fn search_actors(&self, term: &str) -> Result<Vec<Actor>, BskyError> {
        let response: ActorSearchResponse = self
            .get_json("app.bsky.actor.searchActors", &[("term", term.to_string())])
            .await?;
        Ok(response.actors)
    }

    /// Look up a single post by URI (needed for its cid).
    pub async fn get_post(&self, uri: &str) -> Result<Post, BskyError> {
        let response: PostsResponse = self
            .get_json("app.bsky.feed.getPosts", &[("uris", uri.to_string())])
            .await?;
        response
            .posts
            .into_iter()
            .next()
            .ok_or_else(|| BskyError::PostNotFound(uri.to_string()))
    }

    /// Create a plain post, optionally with an attached image.
    pub async fn create_post(
        &self,
        text: &str,
        image: Option<&Path>,
    ) -> Result<CreateRecordResponse, BskyError> {
        let mut record = PostRecord::new(text, Self::now());

        if let Some(path) = image {
            let blob = self.upload_blob(path).await?;
            record = record.with_embed(ImageEmbed::single("Image shared by the operator", blob));
        }

        self.create_record("app.bsky.feed.post", record).await
    }

    /// Reply to the post at `target_uri`.
    pub async fn create_reply(
        &self,
        target_uri: &str,
        text: &str,
    ) -> Result<CreateRecordResponse, BskyError> {
        let target = self.get_post(target_uri).await?;
        let record = PostRecord::new(text, Self::now()).with_reply(ReplyRef::to(&target));
        self.create_record("app.bsky.feed.post", record).await
    }

    /// Like the post at `target_uri`.
    pub async fn like(&self, target_uri: &str) -> Result<CreateRecordResponse, BskyError> {
        let target = self.get_post(target_uri).await?;
        let subject = crate::types::StrongRef::new(&target.uri, &target.cid);
        let record = LikeRecord::new(subject, Self::now());
        self.create_record("app.bsky.feed.like", record).await
    }

    /// Upload a local file as a blob and return its opaque reference.
    pub async fn upload_blob(&self, path: &Path) -> Result<Value, BskyError> {
        let data = std::fs::read(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        debug!(path = %path.display(), mime = %mime, bytes = data.len(), "uploading blob");

        let response = self
            .http
            .post(self.config.xrpc_url("com.atproto.repo.uploadBlob"))
            .bearer_auth(&self.session.access_jwt)
            .header("Content-Type", mime.to_string())
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(BskyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let uploaded: UploadBlobResponse = response.json().await?;
        Ok(uploaded.blob)
    }

    /// Write a record into the account's repo.
    async fn create_record<T: Serialize>(
        &self,
        collection: &str,
        record: T,
    ) -> Result<CreateRecordResponse, BskyError> {
        let request = CreateRecordRequest {
            repo: self.session.did.clone(),
            collection: collection.to_string(),
            record,
        };

        let response = self
            .http
            .post(self.config.xrpc_url("com.atproto.repo.createRecord"))
            .bearer_auth(&self.session.access_jwt)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(BskyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let created: CreateRecordResponse = response.json().await?;
        debug!(collection, uri = %created.uri, "record created");
        Ok(created)
    }

    /// Authenticated GET returning JSON.
    async fn get_json<T: DeserializeOwned>(
        &self,
        nsid: &str,
        query: &[(&str, String)],
    ) -> Result<T, BskyError> {
        let response = self
            .http
            .get(self.config.xrpc_url(nsid))
            .bearer_auth(&self.session.access_jwt)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(BskyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Pull the human-readable message out of an error response.
    async fn error_message(response: reqwest::Response) -> String {
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(body),
            Err(_) => body,
        }
    }

    /// Current time in the RFC 3339 form ATProto records use.
    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
