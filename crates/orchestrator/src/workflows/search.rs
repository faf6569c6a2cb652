//! Search workflow: find an account and engage with its recent posts.

use tracing::info;

use super::{interact_with, present_listing, select_message, Toolkit, DEFAULT_LIMIT};
use crate::analysis;
use crate::error::WorkflowError;

fn banner(tk: &Toolkit<'_>) {
    tk.console.line("Search workflow:");
    tk.console.line("  1. Find an account by handle");
    tk.console
        .line(&format!("  2. Fetch and analyze its latest {} posts", DEFAULT_LIMIT));
    tk.console.line("  3. Pick one to like and/or reply to");
}

/// Run the search workflow once.
pub async fn run(tk: &Toolkit<'_>) -> Result<(), WorkflowError> {
    banner(tk);

    let term = tk.console.prompt("Enter a handle to search for:")?;
    if term.is_empty() {
        tk.console.line("No handle entered.");
        return Ok(());
    }

    let actor = match tk.social.search_actor(&term).await {
        Ok(Some(actor)) => actor,
        Ok(None) => {
            tk.console.line(&format!("No account found for '{}'.", term));
            return Ok(());
        }
        Err(e) => {
            tk.console.line(&format!("Search failed: {}", e));
            return Ok(());
        }
    };
    tk.console.line(&format!(
        "Found user: {} (@{})",
        actor.display_name, actor.handle
    ));
    info!(handle = %actor.handle, "resolved account");

    let mut listing = match tk.social.author_feed(&actor.id, DEFAULT_LIMIT).await {
        Ok(listing) => listing,
        Err(e) => {
            tk.console.line(&format!("Could not fetch posts: {}", e));
            return Ok(());
        }
    };
    if listing.is_empty() {
        tk.console.line("This account has no recent posts.");
        return Ok(());
    }

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
    use crate::social::ActorRef;
    use crate::workflows::support::RecordingSocial;
    use agent_core::{Listing, Message, ProfileSet};
    use mock_completion::CannedCompletion;

    fn target() -> ActorRef {
        ActorRef {
            id: "did:plc:target".to_string(),
            handle: "carol.bsky.social".to_string(),
            display_name: "Carol".to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_workflow_end_to_end() {
        let console = ScriptedConsole::new([
            "carol", // search term
            "1",     // select message
            "yes",   // like?
            "no",    // reply?
        ]);
        let posts = Listing::new(vec![Message::new(
            1,
            "at://p/9",
            "carol.bsky.social",
            "Launching my newsletter next week.",
            "ts",
        )]);
        let social = RecordingSocial::default()
            .with_actor(target())
            .with_author_feed(posts);
        let backend = CannedCompletion::new(
            [r#"[{"number": 1, "category": "informational", "subject": "newsletter", "style": "upbeat"}]"#],
        );
        let profiles = ProfileSet::builtin();
        let tk = Toolkit::new(&console, &backend, &social, &profiles);

        run(&tk).await.unwrap();

        assert!(console.saw("Found user: Carol (@carol.bsky.social)"));
        assert!(social.saw("author_feed:did:plc:target:20"));
        assert!(social.saw("like:at://p/9"));
    }

    #[tokio::test]
    async fn test_search_workflow_account_not_found() {
        let console = ScriptedConsole::new(["nobody"]);
        let social = RecordingSocial::default();
        let backend = CannedCompletion::new(Vec::<String>::new());
        let profiles = ProfileSet::builtin();
        let tk = Toolkit::new(&console, &backend, &social, &profiles);

        run(&tk).await.unwrap();

        assert!(console.saw("No account found for 'nobody'."));
    }

    #[tokio::test]
    async fn test_search_workflow_blank_term_aborts() {
        let console = ScriptedConsole::new([""]);
        let social = RecordingSocial::default();
        let backend = CannedCompletion::new(Vec::<String>::new());
        let profiles = ProfileSet::builtin();
        let tk = Toolkit::new(&console, &backend, &social, &profiles);

        run(&tk).await.unwrap();

        assert!(console.saw("No handle entered."));
        assert!(social.actions().is_empty());
    }

    #[tokio::test]
    async fn test_search_workflow_account_without_posts() {
        let console = ScriptedConsole::new(["carol"]);
        let social = RecordingSocial::default().with_actor(target());
        let backend = CannedCompletion::new(Vec::<String>::new());
        let profiles = ProfileSet::builtin();
        let tk = Toolkit::new(&console, &backend, &social, &profiles);

        run(&tk).await.unwrap();

        assert!(console.saw("This account has no recent posts."));
    }
}
