//! Political-leaning labels and classification results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Labels the classifier is allowed to produce, used when building the
/// classification prompt.
pub const ALLOWED_LABELS: [&str; 5] = ["far-left", "left", "middle", "right", "far-right"];

/// Vocabulary that marks a value as a category echo rather than reply
/// content. Used by the generator's fallback field scan.
const LABEL_VOCABULARY: [&str; 9] = [
    "progressive",
    "liberal",
    "centrist",
    "conservative",
    "strongly conservative",
    "left",
    "right",
    "far-left",
    "far-right",
];

/// Political leaning of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Leaning {
    FarLeft,
    Left,
    Middle,
    Right,
    FarRight,
    /// Sentinel used when the model's output could not be parsed.
    Unclassified,
}

impl Leaning {
    /// Parse a label case-insensitively. Unknown labels map to
    /// [`Leaning::Unclassified`].
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "far-left" => Self::FarLeft,
            "left" => Self::Left,
            "middle" => Self::Middle,
            "right" => Self::Right,
            "far-right" => Self::FarRight,
            _ => Self::Unclassified,
        }
    }

    /// The canonical label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FarLeft => "far-left",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::FarRight => "far-right",
            Self::Unclassified => "unclassified",
        }
    }

    /// Whether this is the designated polarizing label, which routes to
    /// the mediator profile.
    pub fn is_polarizing(&self) -> bool {
        matches!(self, Self::FarRight)
    }
}

impl fmt::Display for Leaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one message.
#[derive(Debug, Clone)]
pub struct Classification {
    /// The assigned label. Always present: parse failures fall back to
    /// [`Leaning::Unclassified`] instead of erroring.
    pub leaning: Leaning,
    /// Free-text justification from the model.
    pub reasoning: String,
}

impl Classification {
    /// Create a classification with the given label and reasoning.
    pub fn new(leaning: Leaning, reasoning: impl Into<String>) -> Self {
        Self {
            leaning,
            reasoning: reasoning.into(),
        }
    }

    /// The fallback classification used when parsing fails.
    pub fn unclassified() -> Self {
        Self::new(Leaning::Unclassified, "No reasoning provided")
    }
}

/// Whether a candidate value looks like a category label echoed back
/// as if it were reply content.
pub fn looks_like_label(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    LABEL_VOCABULARY.iter().any(|label| *label == lowered)
}
