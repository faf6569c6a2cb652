//! Reply workflow: browse the following feed and answer one post.

use tracing::info;

use super::{interact_with, present_listing, select_message, Toolkit, DEFAULT_LIMIT};
use crate::analysis;
use crate::error::WorkflowError;

fn banner(tk: &Toolkit<'_>) {
    tk.console.line("Reply workflow:");
    tk.console
        .line(&format!("  1. Fetch the latest {} posts you follow", DEFAULT_LIMIT));
    tk.console.line("  2. Analyze and list them");
    tk.console.line("  3. Pick one to like and/or reply to");
}

/// Run the reply workflow once.
pub async fn run(tk: &Toolkit<'_>) -> Result<(), WorkflowError> {
    banner(tk);

    let mut listing = match tk.social.following_feed(DEFAULT_LIMIT).await {
        Ok(listing) => listing,
        Err(e) => {
            tk.console
                .line(&format!("Could not fetch the feed: {}", e));
            return Ok(());
        }
    };
    if listing.is_empty() {
        tk.console.line("No messages in the feed.");
        return Ok(());
    }
    info!(count = listing.len(), "fetched following feed");

    analysis::analyze_listing(tk.completion, tk.profiles.analyst(), &mut listing).await;
    present_listing(tk.console, &listing);

    match select_message(tk.console, &listing)? {
        Some(message) => interact_with(tk, message).await,
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::workflows::support::RecordingSocial;
    use agent_core::{Listing, Message, ProfileSet};
    use mock_completion::CannedCompletion;

    fn feed() -> Listing {
        Listing::new(vec![
            Message::new(1, "at://p/1", "alice", "The new bill passed today.", "ts"),
            Message::new(2, "at://p/2", "bob", "Anyone tried the new trail?", "ts"),
        ])
    }

    #[tokio::test]
    async fn test_reply_workflow_end_to_end() {
        let console = ScriptedConsole::new([
            "2",     // select message
            "no",    // like?
            "yes",   // reply?
            "agent", // who drafts
            "yes",   // approve
            "yes",   // confirm
        ]);
        let social = RecordingSocial::default().with_following(feed());
        let backend = CannedCompletion::new([
            r#"[{"number": 1, "category": "informational", "subject": "politics", "style": "dry"},
               {"number": 2, "category": "question", "subject": "hiking", "style": "friendly"}]"#,
            r#"{"category": "middle", "reasoning": "casual question"}"#,
            r#"{"formatted_message": "Yes, went last weekend, worth it."}"#,
            r#"{"valid": true, "feedback": "fine"}"#,
        ]);
        let profiles = ProfileSet::builtin();
        let tk = Toolkit::new(&console, &backend, &social, &profiles);

        run(&tk).await.unwrap();

        assert!(console.saw("2. [question] @bob: Anyone tried the new trail?"));
        assert!(social.saw("reply:at://p/2:Yes, went last weekend, worth it."));
    }

    #[tokio::test]
    async fn test_reply_workflow_skip_selection() {
        let console = ScriptedConsole::new(["skip"]);
        let social = RecordingSocial::default().with_following(feed());
        let backend = CannedCompletion::new(["not parsable"]);
        let profiles = ProfileSet::builtin();
        let tk = Toolkit::new(&console, &backend, &social, &profiles);

        run(&tk).await.unwrap();

        // Listing still shown with placeholder categories.
        assert!(console.saw("[Not categorized] @alice"));
        assert!(social.actions().iter().all(|a| !a.starts_with("reply:")));
    }

    #[tokio::test]
    async fn test_reply_workflow_empty_feed() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        let social = RecordingSocial::default();
        let backend = CannedCompletion::new(Vec::<String>::new());
        let profiles = ProfileSet::builtin();
        let tk = Toolkit::new(&console, &backend, &social, &profiles);

        run(&tk).await.unwrap();

        assert!(console.saw("No messages in the feed."));
        assert!(backend.prompts().is_empty());
    }
}
