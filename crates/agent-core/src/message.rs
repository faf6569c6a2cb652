//! Messages, listings, and candidate replies.

use crate::text;

/// A single social-network post surfaced to a workflow.
///
/// The `uri` is an opaque resource identifier: it is never parsed,
/// only passed back to the social client to address likes and replies.
#[derive(Debug, Clone)]
pub struct Message {
    /// 1-based position in the current listing, assigned at fetch time.
    pub ordinal: usize,
    /// Opaque resource identifier.
    pub uri: String,
    /// Display author.
    pub author: String,
    /// Text body.
    pub text: String,
    /// Timestamp as reported by the social network, kept opaque.
    pub indexed_at: String,
    /// Category label attached by listing analysis.
    pub category: Option<String>,
    /// Free-text subject/style summary attached by listing analysis.
    pub analysis: Option<String>,
}

impl Message {
    /// Create a message with no enrichment.
    pub fn new(
        ordinal: usize,
        uri: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
        indexed_at: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            uri: uri.into(),
            author: author.into(),
            text: text.into(),
            indexed_at: indexed_at.into(),
            category: None,
            analysis: None,
        }
    }

    /// The category label, or the default placeholder.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Not categorized")
    }
}

/// An ordered, numbered batch of messages fetched in one call, scoped
/// to a single workflow invocation.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    messages: Vec<Message>,
}

impl Listing {
    /// Build a listing from pre-numbered messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Look up a message by its ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&Message> {
        self.messages.iter().find(|m| m.ordinal == ordinal)
    }

    /// Iterate over messages in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Iterate mutably, for enrichment.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Message> {
        self.messages.iter_mut()
    }

    /// Number of messages in the listing.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Where a candidate reply's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Typed by the operator.
    Human,
    /// Generated by an agent profile (the profile name is recorded).
    Agent(String),
}

/// A draft outbound message moving through generation, validation,
/// and approval before being dispatched.
#[derive(Debug, Clone)]
pub struct CandidateReply {
    /// Draft text.
    pub text: String,
    /// Who authored the draft.
    pub provenance: Provenance,
}

impl CandidateReply {
    /// A human-authored candidate.
    pub fn human(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::Human,
        }
    }

    /// An agent-authored candidate carrying the generating profile's name.
    pub fn agent(profile: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::Agent(profile.into()),
        }
    }

    /// Enforce the character budget on the draft text.
    pub fn normalized(mut self, budget: usize) -> Self {
        self.text = text::clamp(&self.text, budget);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_of(n: usize) -> Listing {
        let messages = (1..=n)
            .map(|i| {
                Message::new(
                    i,
                    format!("at://did:plc:abc/app.bsky.feed.post/{}", i),
                    format!("author{}", i),
                    format!("post number {}", i),
                    "2025-06-01T12:00:00Z",
                )
            })
            .collect();
        Listing::new(messages)
    }

    #[test]
    fn test_listing_lookup_by_ordinal() {
        let listing = listing_of(3);
        assert_eq!(listing.get(2).expect("present").author, "author2");
        assert!(listing.get(4).is_none());
        assert!(listing.get(0).is_none());
    }

    #[test]
    fn test_category_label_default() {
        let listing = listing_of(1);
        let msg = listing.get(1).expect("present");
        assert_eq!(msg.category_label(), "Not categorized");
    }

    #[test]
    fn test_candidate_normalization() {
        let candidate = CandidateReply::agent("mediator", "z".repeat(210)).normalized(180);
        assert_eq!(candidate.text.chars().count(), 180);
        assert!(candidate.text.ends_with("..."));
        assert_eq!(candidate.provenance, Provenance::Agent("mediator".into()));
    }

    #[test]
    fn test_short_candidate_untouched() {
        let candidate = CandidateReply::human("short and sweet").normalized(180);
        assert_eq!(candidate.text, "short and sweet");
    }
}
