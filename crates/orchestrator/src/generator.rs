//! Reply generation by the routed persona profile.

use agent_core::extract::{self, Extraction};
use agent_core::{
    looks_like_label, CandidateReply, Classification, Completion, Profile,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Keys scanned, in order, when the model did not use the requested
/// `formatted_message` key.
const FALLBACK_FIELDS: [&str; 6] = [
    "final_reply",
    "reply",
    "analyzed_reply",
    "message",
    "text",
    "content",
];

/// Generate a draft reply to `message_text` as `profile`.
///
/// Transport failures propagate and abort the step; malformed output
/// does not. A parsed object is scanned for the reply text
/// (`formatted_message` first, then the fallback fields), a degraded
/// extraction uses the recovered line, and anything else falls back to
/// the sanitized raw response.
pub async fn generate(
    completion: &dyn Completion,
    profile: &Profile,
    classification: &Classification,
    message_text: &str,
    budget: usize,
) -> Result<CandidateReply, crate::WorkflowError> {
    let prompt = json!({
        "task": "generate_reply",
        "message": message_text,
        "category": classification.leaning.as_str(),
        "instruction": format!(
            "{} Write a reply to this message in at most {} characters. \
             Return a JSON object with key 'formatted_message' containing \
             only the reply text.",
            profile.role, budget
        ),
    })
    .to_string();

    let raw = completion.complete(&prompt).await?;

    let text = match extract::extract_object(&raw) {
        Extraction::Parsed(value) => match scan_fields(&value) {
            Some(text) => text,
            None => {
                warn!(profile = profile.name, "no reply field found, using raw response");
                extract::sanitize(&raw)
            }
        },
        Extraction::Degraded(line) => {
            debug!(profile = profile.name, "degraded extraction, using recovered line");
            line
        }
        Extraction::Empty => extract::sanitize(&raw),
    };

    Ok(CandidateReply::agent(profile.name, text))
}

/// Pick the reply text out of a parsed object.
///
/// A string value qualifies when non-empty and not a bare category
/// label echoed back. An object value qualifies when it carries a
/// `text` string, a shape some models produce for nested replies.
fn scan_fields(value: &Value) -> Option<String> {
    let keys = std::iter::once("formatted_message").chain(FALLBACK_FIELDS);
    for key in keys {
        match value.get(key) {
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() && !looks_like_label(trimmed) {
                    return Some(trimmed.to_string());
                }
            }
            Some(Value::Object(map)) => {
                if let Some(Value::String(s)) = map.get("text") {
                    let trimmed = s.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
            }
            _ => {}
        }
    }
    None
}
