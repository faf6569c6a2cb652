//! Operator console abstraction.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use crate::error::WorkflowError;

/// Blocking prompt/response primitive for the human operator.
///
/// Every prompt is a literal string; every response comes back trimmed.
/// Abstracted so workflows can be exercised with a scripted console.
pub trait Console: Send + Sync {
    /// Show a prompt and block until the operator answers.
    fn prompt(&self, question: &str) -> Result<String, WorkflowError>;

    /// Print one line of output.
    fn line(&self, text: &str);
}

/// Console backed by stdin/stdout.
#[derive(Debug, Clone, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Create a new standard console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn prompt(&self, question: &str) -> Result<String, WorkflowError> {
        print!("{} ", question);
        let _ = io::stdout().flush();

        let mut buffer = String::new();
        let bytes = io::stdin()
            .lock()
            .read_line(&mut buffer)
            .map_err(|_| WorkflowError::ConsoleClosed)?;
        if bytes == 0 {
            return Err(WorkflowError::ConsoleClosed);
        }
        Ok(buffer.trim().to_string())
    }

    fn line(&self, text: &str) {
        println!("{}", text);
    }
}

/// Console that replays scripted answers, for tests.
///
/// Prompts are answered from the script in order; an exhausted script
/// behaves like a closed console. Everything shown to the "operator"
/// is captured in a transcript for assertions.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Everything printed or asked so far.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.lock().expect("transcript lock").clone()
    }

    /// Whether any transcript line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript().iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn prompt(&self, question: &str) -> Result<String, WorkflowError> {
        self.transcript
            .lock()
            .expect("transcript lock")
            .push(question.to_string());
        self.answers
            .lock()
            .expect("answers lock")
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or(WorkflowError::ConsoleClosed)
    }

    fn line(&self, text: &str) {
        self.transcript
            .lock()
            .expect("transcript lock")
            .push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_answers_in_order() {
        let console = ScriptedConsole::new(["yes", " no "]);
        assert_eq!(console.prompt("first?").unwrap(), "yes");
        assert_eq!(console.prompt("second?").unwrap(), "no");
        assert!(matches!(
            console.prompt("third?"),
            Err(WorkflowError::ConsoleClosed)
        ));
    }

    #[test]
    fn test_scripted_console_transcript() {
        let console = ScriptedConsole::new(["ok"]);
        console.line("hello operator");
        let _ = console.prompt("continue?");
        assert!(console.saw("hello operator"));
        assert!(console.saw("continue?"));
    }
}
