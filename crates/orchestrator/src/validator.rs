//! Analyst validation of a generated draft.

use agent_core::extract::{self, Extraction};
use agent_core::{Completion, Profile};
use serde_json::{json, Value};
use tracing::warn;

/// Outcome of validating a draft reply.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Whether the analyst considered the draft acceptable as-is.
    pub valid: bool,
    /// The draft text to carry forward, possibly edited by the analyst.
    pub text: String,
    /// Free-text feedback for the operator.
    pub feedback: String,
}

/// Ask the analyst to check (and possibly edit) a draft reply.
///
/// Valid-by-default: a failed request or unparsable response keeps the
/// draft unchanged rather than blocking the pipeline, since the human
/// operator still approves every outbound message.
pub async fn validate(
    completion: &dyn Completion,
    analyst: &Profile,
    original_message: &str,
    candidate_text: &str,
    budget: usize,
) -> Verdict {
    let prompt = json!({
        "task": "validate_reply",
        "message": original_message,
        "draft": candidate_text,
        "instruction": format!(
            "{} Check this draft reply for tone, relevance, and length \
             (at most {} characters). Return a JSON object with keys: \
             'valid' (boolean), 'edited_response' (the improved reply, \
             or the draft unchanged), and 'feedback'.",
            analyst.role, budget
        ),
    })
    .to_string();

    let raw = match completion.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "validation request failed, accepting draft");
            return Verdict {
                valid: true,
                text: candidate_text.to_string(),
                feedback: "No feedback provided".to_string(),
            };
        }
    };

    match extract::extract_object(&raw) {
        Extraction::Parsed(value) => {
            let valid = value
                .get("valid")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let text = value
                .get("edited_response")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(candidate_text)
                .to_string();
            let feedback = value
                .get("feedback")
                .and_then(Value::as_str)
                .unwrap_or("No feedback provided")
                .to_string();
            Verdict {
                valid,
                text,
                feedback,
            }
        }
        _ => {
            warn!("unparsable validation response, accepting draft");
            Verdict {
                valid: true,
                text: candidate_text.to_string(),
                feedback: "No feedback provided".to_string(),
            }
        }
    }
}
