//! Per-string classification against the rule table.

use sizes_model::Classification;

use crate::quantity::quantity;
use crate::table::RuleTable;

/// Tie-breaking nudge for length qualifiers, small enough to never flip
/// the relative order of two different base sizes.
const LENGTH_EPSILON: f64 = 0.005;

/// Classifies one raw size string against the built-in rule table.
///
/// Never fails: a string no rule matches degrades to a numeric fallback
/// rank, and a string with no usable number lands at rank 0.
#[must_use]
pub fn classify(raw: &str) -> Classification {
    classify_with(RuleTable::builtin(), raw)
}

/// Classifies one raw size string against a caller-provided table.
#[must_use]
pub fn classify_with(table: &RuleTable, raw: &str) -> Classification {
    let value = quantity(raw);
    match table.first_match(raw) {
        Some(rule) => Classification {
            raw: raw.to_string(),
            label: rule.label().to_string(),
            rank: rule.rank() as i64,
            magnitude: magnitude(value, raw, rule.label()),
        },
        None => {
            tracing::debug!(raw, value, "no rule matched; using numeric fallback");
            Classification {
                raw: raw.to_string(),
                label: raw.to_string(),
                rank: value.trunc() as i64,
                magnitude: magnitude(value, raw, raw),
            }
        }
    }
}

/// Turns an extracted quantity into the signed, weighted magnitude key.
///
/// Labels in the below-baseline families (`XS` ladder and its French
/// `TP` analogue) negate the quantity, which makes the whole
/// extra-small ladder sort under S/M/L without per-size rules. A
/// `short`/`long` qualifier in the raw text then nudges the result by
/// [`LENGTH_EPSILON`] as a tie-break.
fn magnitude(value: f64, raw: &str, label: &str) -> f64 {
    let mut value = if label.contains("XS") || label.contains("TP") {
        -value
    } else {
        value
    };
    let lowered = raw.to_ascii_lowercase();
    if lowered.contains("short") {
        value -= LENGTH_EPSILON;
    } else if lowered.contains("long") {
        value += LENGTH_EPSILON;
    }
    value
}
