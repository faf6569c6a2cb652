//! Fence stripping and resilient JSON extraction.
//!
//! Model output is unreliable: it may wrap JSON in markdown fences,
//! append trailing garbage, or skip JSON entirely. Everything here is
//! total - extraction returns a tagged [`Extraction`] and never an
//! error, so a single malformed model reply cannot halt a session.

use serde_json::Value;

/// Minimum length for a line to qualify as heuristic replacement text.
const MIN_HEURISTIC_LINE_LEN: usize = 10;

/// Outcome of a best-effort extraction attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Strict structured parse succeeded.
    Parsed(Value),
    /// Structured parse failed; a plausible plain-text line was
    /// recovered instead.
    Degraded(String),
    /// Nothing usable was found.
    Empty,
}

impl Extraction {
    /// The parsed value, if the strict parse succeeded.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Parsed(value) => Some(value),
            _ => None,
        }
    }
}

/// Strip markdown code-fence markers and surrounding whitespace.
///
/// Idempotent: sanitizing already-sanitized text is a no-op.
/// Empty input yields empty output.
pub fn sanitize(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Extract a JSON object from model output.
///
/// Tries a strict parse of the sanitized text (with balanced-brace
/// recovery for trailing garbage). On failure, falls back to the
/// longest plain-text line, then to [`Extraction::Empty`].
pub fn extract_object(raw: &str) -> Extraction {
    let clean = sanitize(raw);

    if let Some(start) = clean.find('{') {
        let candidate = balanced(&clean[start..], '{', '}');
        if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(candidate) {
            return Extraction::Parsed(value);
        }
    }

    heuristic(&clean)
}

/// Extract a JSON array of objects from model output.
///
/// Tries a strict array parse first. If the model returned an object
/// instead, any embedded array value is accepted. Falls back like
/// [`extract_object`].
pub fn extract_array(raw: &str) -> Extraction {
    let clean = sanitize(raw);

    if let Some(start) = clean.find('[') {
        let candidate = balanced(&clean[start..], '[', ']');
        if let Ok(value @ Value::Array(_)) = serde_json::from_str::<Value>(candidate) {
            return Extraction::Parsed(value);
        }
    }

    // The model may have wrapped the list in an object under some key.
    if let Some(start) = clean.find('{') {
        let candidate = balanced(&clean[start..], '{', '}');
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(candidate) {
            if let Some(list) = map.into_iter().map(|(_, v)| v).find(Value::is_array) {
                return Extraction::Parsed(list);
            }
        }
    }

    heuristic(&clean)
}

/// Longest-line fallback over already-sanitized text.
fn heuristic(clean: &str) -> Extraction {
    match longest_line(clean) {
        Some(line) => Extraction::Degraded(line),
        None => Extraction::Empty,
    }
}

/// Return the longest line if it reaches the heuristic threshold.
fn longest_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .max_by_key(|line| line.len())
        .filter(|line| line.len() >= MIN_HEURISTIC_LINE_LEN)
        .map(str::to_string)
}

/// Extract a balanced JSON value from a string that starts with `open`.
///
/// This handles responses with trailing characters like extra braces,
/// e.g. `{"category": "left"}}}` -> `{"category": "left"}`.
fn balanced(s: &str, open: char, close: char) -> &str {
    if !s.starts_with(open) {
        return s;
    }

    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    // Unbalanced input: return it unchanged and let the parse fail.
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_fences() {
        let raw = "```json\n{\"category\": \"left\"}\n```";
        assert_eq!(sanitize(raw), "{\"category\": \"left\"}");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let raw = "```json\n{\"a\": 1}\n```  ";
        let once = sanitize(raw);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn test_extract_object_clean() {
        let result = extract_object(r#"{"category": "middle", "reasoning": "neutral"}"#);
        let value = result.value().expect("should parse");
        assert_eq!(value["category"], "middle");
    }

    #[test]
    fn test_extract_object_fenced() {
        let raw = "```json\n{\"valid\": true}\n```";
        assert!(matches!(extract_object(raw), Extraction::Parsed(_)));
    }

    #[test]
    fn test_extract_object_trailing_braces() {
        let raw = r#"{"category": "left"}}}"#;
        let value = extract_object(raw);
        assert_eq!(value.value().expect("should parse")["category"], "left");
    }

    #[test]
    fn test_extract_object_with_leading_prose() {
        let raw = "Here is my answer:\n{\"category\": \"right\"}";
        assert!(matches!(extract_object(raw), Extraction::Parsed(_)));
    }

    #[test]
    fn test_extract_object_degrades_to_longest_line() {
        let raw = "ok\nThe senator's proposal deserves a careful look.\nbye";
        match extract_object(raw) {
            Extraction::Degraded(line) => {
                assert_eq!(line, "The senator's proposal deserves a careful look.");
            }
            other => panic!("expected Degraded, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_object_empty_for_short_noise() {
        assert_eq!(extract_object("ok"), Extraction::Empty);
        assert_eq!(extract_object(""), Extraction::Empty);
    }

    #[test]
    fn test_extract_never_panics_on_truncated_json() {
        // Truncated JSON degrades instead of erroring.
        let raw = r#"{"category": "far-right", "reasoning": "because"#;
        let result = extract_object(raw);
        assert!(matches!(result, Extraction::Degraded(_)));
    }

    #[test]
    fn test_extract_array_direct() {
        let raw = r#"[{"number": 1, "category": "neutral"}]"#;
        let value = extract_array(raw);
        assert!(value.value().expect("should parse").is_array());
    }

    #[test]
    fn test_extract_array_embedded_in_object() {
        let raw = r#"{"results": [{"number": 1}, {"number": 2}]}"#;
        match extract_array(raw) {
            Extraction::Parsed(Value::Array(items)) => assert_eq!(items.len(), 2),
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_array_from_non_json() {
        let raw = "no structured data here at all";
        assert!(matches!(extract_array(raw), Extraction::Degraded(_)));
    }

    #[test]
    fn test_balanced_ignores_braces_in_strings() {
        let raw = r#"{"text": "a } inside"}"#;
        assert_eq!(balanced(raw, '{', '}'), raw);
    }
}
