//! Bulk analysis of a fetched listing.

use agent_core::extract::{self, Extraction};
use agent_core::{Completion, Listing, Profile};
use serde_json::{json, Value};
use tracing::warn;

/// Categorize and summarize every message in a listing, in one request.
///
/// Results are merged back into the listing by message number. Total:
/// on any failure (or for numbers the model skipped) messages keep
/// their placeholder enrichment and the workflow proceeds.
pub async fn analyze_listing(
    completion: &dyn Completion,
    analyst: &Profile,
    listing: &mut Listing,
) {
    if listing.is_empty() {
        return;
    }

    let message_data: Vec<Value> = listing
        .iter()
        .map(|m| {
            json!({
                "number": m.ordinal,
                "author": m.author,
                "text": m.text,
            })
        })
        .collect();

    let prompt = json!({
        "task": "analyze",
        "messages": message_data,
        "instruction": format!(
            "{} For each message, determine its category (one of: 'neutral', \
             'informational', 'opinion', 'question'), its subject, and its style. \
             Return a JSON array of objects with keys: 'number', 'category', \
             'subject', 'style'.",
            analyst.role
        ),
    })
    .to_string();

    let raw = match completion.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "listing analysis request failed");
            return;
        }
    };

    let items = match extract::extract_array(&raw) {
        Extraction::Parsed(Value::Array(items)) => items,
        _ => {
            warn!("unparsable listing analysis response, keeping placeholders");
            return;
        }
    };

    for item in items {
        let Some(number) = item.get("number").and_then(Value::as_u64) else {
            continue;
        };
        let Some(message) = listing.iter_mut().find(|m| m.ordinal == number as usize) else {
            continue;
        };

        if let Some(category) = item.get("category").and_then(Value::as_str) {
            message.category = Some(category.to_string());
        }

        let subject = item.get("subject").and_then(Value::as_str).unwrap_or("?");
        let style = item.get("style").and_then(Value::as_str).unwrap_or("?");
        message.analysis = Some(format!("Subject: {}, Style: {}", subject, style));
    }
}
