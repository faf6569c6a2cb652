//! Outbound text length normalization.

/// Default character budget for outbound text.
pub const DEFAULT_BUDGET: usize = 180;

/// Truncation marker appended when text is clamped.
const MARKER: &str = "...";

/// Clamp text to at most `budget` characters.
///
/// Text at or under the budget passes through unchanged. Longer text
/// is truncated so the result is exactly `budget` characters and ends
/// with `"..."`.
pub fn clamp(text: &str, budget: usize) -> String {
    let len = text.chars().count();
    if len <= budget {
        return text.to_string();
    }

    let keep = budget.saturating_sub(MARKER.len());
    let mut clamped: String = text.chars().take(keep).collect();
    clamped.push_str(MARKER);
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(clamp("hello", 180), "hello");
    }

    #[test]
    fn test_exact_budget_unchanged() {
        let text = "x".repeat(180);
        assert_eq!(clamp(&text, 180), text);
    }

    #[test]
    fn test_long_text_clamped_to_budget() {
        let text = "y".repeat(210);
        let clamped = clamp(&text, 180);
        assert_eq!(clamped.chars().count(), 180);
        assert!(clamped.ends_with("..."));
    }

    #[test]
    fn test_marker_counts_against_budget() {
        let clamped = clamp("abcdefghij", 5);
        assert_eq!(clamped, "ab...");
        assert_eq!(clamped.chars().count(), 5);
    }

    #[test]
    fn test_multibyte_counts_chars_not_bytes() {
        let text = "é".repeat(200);
        let clamped = clamp(&text, 180);
        assert_eq!(clamped.chars().count(), 180);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(clamp("", 180), "");
    }
}
