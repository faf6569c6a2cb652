//! ATProto request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session returned by `com.atproto.server.createSession`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Account DID.
    pub did: String,
    /// Account handle.
    pub handle: String,
    /// Access token for authenticated calls.
    pub access_jwt: String,
}

/// An actor (account) reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub did: String,
    pub handle: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Actor {
    /// Display name when set, otherwise the handle.
    pub fn display(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.handle)
    }
}

/// Response from `app.bsky.actor.searchActors`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActorSearchResponse {
    pub actors: Vec<Actor>,
}

/// The stored record of a post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPostRecord {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

/// A post as returned in feeds and lookups.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub uri: String,
    pub cid: String,
    pub author: Actor,
    pub record: FeedPostRecord,
    pub indexed_at: String,
}

/// One item of a feed response.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedItem {
    pub post: Post,
}

/// Response from `app.bsky.feed.getTimeline` / `getAuthorFeed`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub feed: Vec<FeedItem>,
}

/// Response from `app.bsky.feed.getPosts`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// A strong reference to a record (uri + cid).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrongRef {
    pub uri: String,
    pub cid: String,
}

impl StrongRef {
    pub fn new(uri: impl Into<String>, cid: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            cid: cid.into(),
        }
    }
}

/// Reply references for a post record.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyRef {
    pub root: StrongRef,
    pub parent: StrongRef,
}

impl ReplyRef {
    /// Reply directly to a post, using it as both root and parent.
    pub fn to(target: &Post) -> Self {
        let strong = StrongRef::new(&target.uri, &target.cid);
        Self {
            root: strong.clone(),
            parent: strong,
        }
    }
}

/// An image within an image embed. The blob reference is kept opaque
/// and passed through exactly as the upload endpoint returned it.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedImage {
    pub alt: String,
    pub image: Value,
}

/// An `app.bsky.embed.images` embed.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEmbed {
    #[serde(rename = "$type")]
    pub record_type: &'static str,
    pub images: Vec<EmbeddedImage>,
}

impl ImageEmbed {
    /// Create an embed with a single image blob.
    pub fn single(alt: impl Into<String>, blob: Value) -> Self {
        Self {
            record_type: "app.bsky.embed.images",
            images: vec![EmbeddedImage {
                alt: alt.into(),
                image: blob,
            }],
        }
    }
}

/// An outgoing `app.bsky.feed.post` record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(rename = "$type")]
    pub record_type: &'static str,
    pub text: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<ImageEmbed>,
}

impl PostRecord {
    /// A plain post record with the given text and timestamp.
    pub fn new(text: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            record_type: "app.bsky.feed.post",
            text: text.into(),
            created_at: created_at.into(),
            reply: None,
            embed: None,
        }
    }

    /// Attach reply references.
    pub fn with_reply(mut self, reply: ReplyRef) -> Self {
        self.reply = Some(reply);
        self
    }

    /// Attach an image embed.
    pub fn with_embed(mut self, embed: ImageEmbed) -> Self {
        self.embed = Some(embed);
        self
    }
}

/// An outgoing `app.bsky.feed.like` record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRecord {
    #[serde(rename = "$type")]
    pub record_type: &'static str,
    pub subject: StrongRef,
    pub created_at: String,
}

impl LikeRecord {
    /// A like record pointing at the given post.
    pub fn new(subject: StrongRef, created_at: impl Into<String>) -> Self {
        Self {
            record_type: "app.bsky.feed.like",
            subject,
            created_at: created_at.into(),
        }
    }
}

/// Request body for `com.atproto.repo.createRecord`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRecordRequest<T: Serialize> {
    pub repo: String,
    pub collection: String,
    pub record: T,
}

/// Response from `com.atproto.repo.createRecord`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordResponse {
    pub uri: String,
    pub cid: String,
}

/// Response from `com.atproto.repo.uploadBlob`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadBlobResponse {
    /// Opaque blob reference, passed through into embeds.
    pub blob: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_display_falls_back_to_handle() {
        let actor: Actor = serde_json::from_str(
            r#"{"did": "did:plc:abc", "handle": "alice.example", "displayName": ""}"#,
        )
        .expect("parses");
        assert_eq!(actor.display(), "alice.example");
    }

    #[test]
    fn test_post_record_serializes_reply_and_type() {
        let reply = ReplyRef {
            root: StrongRef::new("at://x", "cid1"),
            parent: StrongRef::new("at://x", "cid1"),
        };
        let record = PostRecord::new("hello", "2025-06-01T00:00:00Z").with_reply(reply);
        let json = serde_json::to_value(&record).expect("serializes");
        assert_eq!(json["$type"], "app.bsky.feed.post");
        assert_eq!(json["reply"]["parent"]["cid"], "cid1");
        assert!(json.get("embed").is_none());
    }

    #[test]
    fn test_feed_parses_minimal_post() {
        let json = r#"{
            "feed": [{
                "post": {
                    "uri": "at://did:plc:abc/app.bsky.feed.post/1",
                    "cid": "bafy123",
                    "author": {"did": "did:plc:abc", "handle": "alice.example"},
                    "record": {"text": "hi", "createdAt": "2025-06-01T00:00:00Z"},
                    "indexedAt": "2025-06-01T00:00:01Z"
                }
            }]
        }"#;
        let feed: FeedResponse = serde_json::from_str(json).expect("parses");
        assert_eq!(feed.feed.len(), 1);
        assert_eq!(feed.feed[0].post.record.text, "hi");
    }
}
