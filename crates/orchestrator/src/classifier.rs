//! Political-leaning classification of a single message.

use agent_core::extract::{self, Extraction};
use agent_core::{Classification, Completion, Leaning, Profile, ALLOWED_LABELS};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Classify one message's political leaning.
///
/// Total: a failed request or unparsable response degrades to
/// [`Leaning::Unclassified`] with a warning. The pipeline never blocks
/// on classification failure.
pub async fn classify(
    completion: &dyn Completion,
    analyst: &Profile,
    message_text: &str,
) -> Classification {
    let labels = ALLOWED_LABELS
        .iter()
        .map(|label| format!("'{}'", label))
        .collect::<Vec<_>>()
        .join(", ");

    let prompt = json!({
        "task": "political_analysis",
        "message": message_text,
        "instruction": format!(
            "{} Analyze this message and determine its political leaning on a scale: {}. \
             Consider the content, tone, and perspective. \
             Return a JSON object with keys: 'category' and 'reasoning'.",
            analyst.role, labels
        ),
    })
    .to_string();

    let raw = match completion.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "classification request failed");
            return Classification::unclassified();
        }
    };

    match extract::extract_object(&raw) {
        Extraction::Parsed(value) => {
            let leaning = value
                .get("category")
                .and_then(Value::as_str)
                .map(Leaning::parse)
                .unwrap_or(Leaning::Unclassified);
            let reasoning = value
                .get("reasoning")
                .and_then(Value::as_str)
                .unwrap_or("No reasoning provided")
                .to_string();
            debug!(label = %leaning, "message classified");
            Classification::new(leaning, reasoning)
        }
        _ => {
            warn!(raw = %raw, "unparsable classification response, defaulting");
            Classification::unclassified()
        }
    }
}
