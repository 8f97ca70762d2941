use serde::{Deserialize, Serialize};

/// Source form of one classification rule before pattern compilation.
///
/// Rules live in an ordered sequence; the zero-based position of a rule
/// in that sequence becomes its rank, which is part of the public
/// ordering contract. Inserting a rule shifts the rank of everything
/// after it, so new rules belong at the correct specificity position,
/// never appended blindly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    /// Case-insensitive regex pattern, anchored as the rule requires.
    pub pattern: String,
    /// Canonical display label for everything the pattern matches.
    pub label: String,
}

impl RuleDef {
    #[must_use]
    pub fn new(pattern: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            label: label.into(),
        }
    }
}
