use serde::{Deserialize, Serialize};

/// Result of classifying one raw size string.
///
/// Constructed fresh for every classification call and never mutated
/// afterwards. `rank` is the matched rule's table position, or a numeric
/// fallback derived from the text when no rule matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The original merchant-feed string, untouched.
    pub raw: String,
    /// Canonical display label, or `raw` when no rule matched.
    pub label: String,
    /// Primary sort key: rule-table position, or extracted number.
    pub rank: i64,
    /// Secondary sort key: signed quantity extracted from the text.
    pub magnitude: f64,
}

impl Classification {
    /// Projects the record back to a display string.
    ///
    /// Returns the canonical label when `normalized` is set and a label
    /// exists, otherwise the original raw string.
    #[must_use]
    pub fn display(&self, normalized: bool) -> &str {
        if normalized && !self.label.is_empty() {
            &self.label
        } else {
            &self.raw
        }
    }
}
