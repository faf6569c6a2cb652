//! The three operator-driven workflows and their shared plumbing.

pub mod post;
pub mod reply;
pub mod search;

#[cfg(test)]
pub(crate) mod support;

use agent_core::extract::{self, Extraction};
use agent_core::text;
use agent_core::{CandidateReply, Completion, Listing, Message, ProfileSet};
use serde_json::json;
use tracing::info;

use crate::approval::{self, ApprovalState};
use crate::console::Console;
use crate::error::WorkflowError;
use crate::social::SocialClient;
use crate::{classifier, generator, validator};

/// Default number of posts fetched per listing.
pub const DEFAULT_LIMIT: usize = 20;

/// Everything a workflow needs, borrowed for one invocation.
pub struct Toolkit<'a> {
    pub console: &'a dyn Console,
    pub completion: &'a dyn Completion,
    pub social: &'a dyn SocialClient,
    pub profiles: &'a ProfileSet,
    /// Character budget for outbound text.
    pub budget: usize,
}

impl<'a> Toolkit<'a> {
    pub fn new(
        console: &'a dyn Console,
        completion: &'a dyn Completion,
        social: &'a dyn SocialClient,
        profiles: &'a ProfileSet,
    ) -> Self {
        Self {
            console,
            completion,
            social,
            profiles,
            budget: text::DEFAULT_BUDGET,
        }
    }
}

/// Print a listing with its analysis enrichment.
fn present_listing(console: &dyn Console, listing: &Listing) {
    for message in listing.iter() {
        console.line(&format!(
            "{}. [{}] @{}: {}",
            message.ordinal,
            message.category_label(),
            message.author,
            message.text
        ));
        if let Some(analysis) = &message.analysis {
            console.line(&format!("   {}", analysis));
        }
    }
}

/// Ask the operator to pick a message by number, or skip.
fn select_message<'l>(
    console: &dyn Console,
    listing: &'l Listing,
) -> Result<Option<&'l Message>, WorkflowError> {
    let answer = console.prompt("Enter a message number to open, or 'skip':")?;
    if answer.eq_ignore_ascii_case("skip") {
        return Ok(None);
    }

    let selected = answer.parse::<usize>().ok().and_then(|n| listing.get(n));
    if selected.is_none() {
        console.line("Invalid selection.");
    }
    Ok(selected)
}

/// Offer to like and reply to one selected message.
///
/// The reply travels through generation, validation, approval, and a
/// final confirmation. Dispatch failures are reported to the operator
/// and never abort the workflow.
async fn interact_with(tk: &Toolkit<'_>, message: &Message) -> Result<(), WorkflowError> {
    let answer = tk.console.prompt("Like this message? (yes/no)")?;
    if answer.eq_ignore_ascii_case("yes") {
        match tk.social.like(&message.uri).await {
            Ok(()) => tk.console.line("Message liked."),
            Err(e) => tk.console.line(&format!("Error liking message: {}", e)),
        }
    }

    let answer = tk.console.prompt("Reply to this message? (yes/no)")?;
    if !answer.eq_ignore_ascii_case("yes") {
        return Ok(());
    }

    let answer = tk
        .console
        .prompt("Write the reply yourself or let an agent draft it? (human/agent)")?;
    let candidate = if answer.eq_ignore_ascii_case("human") {
        // Operator-typed text goes straight to the final confirmation.
        CandidateReply::human(tk.console.prompt("Enter your reply:")?)
    } else {
        let mut candidate = agent_candidate(tk, message).await?;
        let mut regenerated = false;
        loop {
            match approval::present(tk.console, &candidate.text)? {
                ApprovalState::Accepted => break,
                ApprovalState::ManualOverride(text) => {
                    candidate = CandidateReply::human(text);
                    break;
                }
                ApprovalState::RegenerateRequested if !regenerated => {
                    regenerated = true;
                    candidate = alternative_candidate(tk, message, &candidate.text).await?;
                }
                ApprovalState::RegenerateRequested => {
                    candidate = CandidateReply::human(tk.console.prompt("Enter your reply:")?);
                    break;
                }
                ApprovalState::Presented => unreachable!("present() resolves blank input"),
            }
        }
        candidate
    };
    // Under-budget text passes through unchanged.
    let candidate = candidate.normalized(tk.budget);

    let answer = tk.console.prompt("Ready to post this reply? (yes/no)")?;
    if !answer.eq_ignore_ascii_case("yes") {
        tk.console.line("Reply discarded.");
        return Ok(());
    }

    match tk.social.create_reply(&message.uri, &candidate.text).await {
        Ok(()) => {
            info!(uri = %message.uri, "reply posted");
            tk.console.line("Reply posted.");
        }
        Err(e) => tk.console.line(&format!("Error posting reply: {}", e)),
    }
    Ok(())
}

/// Classify the message, route to a persona, draft, validate, clamp.
async fn agent_candidate(
    tk: &Toolkit<'_>,
    message: &Message,
) -> Result<CandidateReply, WorkflowError> {
    let classification =
        classifier::classify(tk.completion, tk.profiles.analyst(), &message.text).await;
    tk.console
        .line(&format!("Category: {}", classification.leaning));
    tk.console
        .line(&format!("Reasoning: {}", classification.reasoning));

    let profile = tk.profiles.responder_for(classification.leaning);
    tk.console.line(&format!("Drafting as {}.", profile.name));

    let draft = generator::generate(
        tk.completion,
        profile,
        &classification,
        &message.text,
        tk.budget,
    )
    .await?;

    let verdict = validator::validate(
        tk.completion,
        tk.profiles.analyst(),
        &message.text,
        &draft.text,
        tk.budget,
    )
    .await;
    tk.console
        .line(&format!("Analyst feedback: {}", verdict.feedback));

    Ok(CandidateReply::agent(profile.name, verdict.text).normalized(tk.budget))
}

/// Ask the analyst for a different take on the same message.
async fn alternative_candidate(
    tk: &Toolkit<'_>,
    message: &Message,
    previous: &str,
) -> Result<CandidateReply, WorkflowError> {
    let analyst = tk.profiles.analyst();
    let prompt = json!({
        "task": "alternative_reply",
        "message": message.text,
        "previous_reply": previous,
        "instruction": format!(
            "{} The operator rejected the previous reply. Write a different \
             reply in at most {} characters. Return a JSON object with key \
             'formatted_message' containing only the reply text.",
            analyst.role, tk.budget
        ),
    })
    .to_string();

    let raw = tk.completion.complete(&prompt).await?;
    let text = match extract::extract_object(&raw) {
        Extraction::Parsed(value) => value
            .get("formatted_message")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| extract::sanitize(&raw)),
        Extraction::Degraded(line) => line,
        Extraction::Empty => extract::sanitize(&raw),
    };

    let verdict = validator::validate(tk.completion, analyst, &message.text, &text, tk.budget).await;
    tk.console
        .line(&format!("Analyst feedback: {}", verdict.feedback));

    Ok(CandidateReply::agent(analyst.name, verdict.text).normalized(tk.budget))
}
