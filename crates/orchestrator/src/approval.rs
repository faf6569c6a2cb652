//! Human approval of a candidate reply.

use crate::console::Console;
use crate::error::WorkflowError;

/// Operator decision about a presented candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalState {
    /// Blank input: show the candidate again and re-prompt.
    Presented,
    /// The candidate is approved as shown.
    Accepted,
    /// The operator wants a regenerated alternative.
    RegenerateRequested,
    /// The operator typed replacement text, used verbatim.
    ManualOverride(String),
}

/// Map raw operator input to an approval decision.
///
/// `yes` accepts, `alternative` asks for a regeneration, blank input
/// re-presents, and any other text becomes a manual override.
pub fn interpret(input: &str) -> ApprovalState {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "yes" => ApprovalState::Accepted,
        "alternative" => ApprovalState::RegenerateRequested,
        "" => ApprovalState::Presented,
        _ => ApprovalState::ManualOverride(trimmed.to_string()),
    }
}

/// Show a candidate and collect the operator's decision.
///
/// Re-prompts on blank input until a real decision arrives.
pub fn present(console: &dyn Console, candidate_text: &str) -> Result<ApprovalState, WorkflowError> {
    loop {
        console.line(&format!("Suggested reply: {}", candidate_text));
        let answer = console.prompt(
            "Send this reply? (yes / alternative / or type your own reply)",
        )?;
        match interpret(&answer) {
            ApprovalState::Presented => continue,
            decision => return Ok(decision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_interpret_decisions() {
        assert_eq!(interpret("yes"), ApprovalState::Accepted);
        assert_eq!(interpret("  YES "), ApprovalState::Accepted);
        assert_eq!(interpret("alternative"), ApprovalState::RegenerateRequested);
        assert_eq!(interpret(""), ApprovalState::Presented);
        assert_eq!(interpret("   "), ApprovalState::Presented);
    }

    #[test]
    fn test_interpret_manual_override_is_verbatim() {
        let short = "Thanks, I disagree.";
        assert_eq!(
            interpret(short),
            ApprovalState::ManualOverride(short.to_string())
        );
    }

    #[test]
    fn test_present_reprompts_on_blank() {
        let console = ScriptedConsole::new(["", "yes"]);
        let decision = present(&console, "a candidate").expect("decision");
        assert_eq!(decision, ApprovalState::Accepted);
        // Candidate shown twice, once per round.
        let shown = console
            .transcript()
            .iter()
            .filter(|line| line.contains("a candidate"))
            .count();
        assert_eq!(shown, 2);
    }

    #[test]
    fn test_present_closed_console_propagates() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        assert!(matches!(
            present(&console, "a candidate"),
            Err(WorkflowError::ConsoleClosed)
        ));
    }
}
