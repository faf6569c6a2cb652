//! Post workflow: compose, revise, and publish a standalone post.

use std::path::Path;

use agent_core::extract::{self, Extraction};
use agent_core::text;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::Toolkit;
use crate::error::WorkflowError;

fn banner(tk: &Toolkit<'_>) {
    tk.console.line("Post workflow:");
    tk.console.line("  1. Write your message");
    tk.console.line("  2. Review the analyst's revision");
    tk.console.line("  3. Publish, optionally with an image");
}

/// Run the post workflow once.
pub async fn run(tk: &Toolkit<'_>) -> Result<(), WorkflowError> {
    banner(tk);

    let original = tk.console.prompt("Enter your message:")?;
    if original.is_empty() {
        tk.console.line("No message entered.");
        return Ok(());
    }

    let revised = revise(tk, &original).await;
    tk.console.line(&format!("Original: {}", original));
    tk.console.line(&format!("Revised:  {}", revised));

    let mut choice = tk
        .console
        .prompt("Post which version? (original/revised)")?;
    if !choice.eq_ignore_ascii_case("original") && !choice.eq_ignore_ascii_case("revised") {
        choice = tk
            .console
            .prompt("Please answer 'original' or 'revised':")?;
    }
    let selected = if choice.eq_ignore_ascii_case("revised") {
        revised
    } else {
        original
    };
    let outbound = text::clamp(&selected, tk.budget);

    let image_path = tk
        .console
        .prompt("Attach an image? Enter a file path, or leave blank:")?;
    let image = (!image_path.is_empty()).then(|| Path::new(image_path.as_str()).to_path_buf());

    match tk.social.create_post(&outbound, image.as_deref()).await {
        Ok(()) => {
            info!("post published");
            tk.console.line("Post published.");
        }
        Err(e) => tk.console.line(&format!("Error publishing post: {}", e)),
    }
    Ok(())
}

/// Ask the analyst for a polished version of the operator's text.
///
/// Total: any failure falls back to the original text.
async fn revise(tk: &Toolkit<'_>, original: &str) -> String {
    let analyst = tk.profiles.analyst();
    let prompt = json!({
        "task": "compose_post",
        "message": original,
        "instruction": format!(
            "{} Improve this post for clarity and tone in at most {} \
             characters, keeping the author's intent. Return a JSON object \
             with key 'formatted_message' containing only the revised text.",
            analyst.role, tk.budget
        ),
    })
    .to_string();

    let raw = match tk.completion.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "revision request failed, keeping original");
            return original.to_string();
        }
    };

    match extract::extract_object(&raw) {
        Extraction::Parsed(value) => value
            .get("formatted_message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| original.to_string()),
        Extraction::Degraded(line) => line,
        Extraction::Empty => original.to_string(),
    }
}
