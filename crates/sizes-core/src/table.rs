//! The ordered rule table mapping raw size text to canonical labels.
//!
//! The table is a fixed sequence of case-insensitive patterns evaluated
//! first-match-wins, so sequence order encodes precedence: every rule
//! must be more specific than the rules after it. A lone `l` is Large,
//! but `lt` is Large Tall and `ls` is Long Sleeve, so those rules sit
//! in front of the generic starts-with-`l` rules.
//!
//! A rule's zero-based position doubles as its rank, the primary sort
//! key for the whole ordering contract. Inserting a rule shifts the
//! rank of everything after it; new size families go at the correct
//! specificity position, never at the end.

use std::sync::LazyLock;

use regex::RegexBuilder;
use sizes_model::{Result, RuleDef, SizesError};

/// Built-in rule set, grouped by semantic family.
///
/// Tall variants (`st`, `mt`, `lt`, `xlt`, `2xt`, `2xlt`) are placed
/// right after the exact base rule of their family and before the
/// family's prefix catch-all, so each tall size ranks immediately
/// after its untalled counterpart.
const BUILTIN_RULES: &[(&str, &str)] = &[
    // One-size-fits-all
    ("^osfa.*$", "OSFA"),
    ("^one .*$", "OSFA"),
    ("^one$", "OSFA"),
    // Extra-small ladder (sorts below S via negated magnitude)
    ("^3tp", "XXXS"),
    ("^xxxs", "XXXS"),
    ("^3xs", "XXXS"),
    ("^xxs", "XXS"),
    ("^2xs", "XXS"),
    ("^2tp", "XXS"),
    ("^xs .*$", "XS"),
    ("^x sm.*$", "XS"),
    ("^extra small.*$", "XS"),
    ("^xs/s*$", "XS/S"),
    ("^xs.*$", "XS"),
    ("^.* xs$", "XS"),
    ("^tp", "XS"),
    // Small family, with sleeve-length tags carved out first
    ("^sm.*$", "S"),
    ("^.* small", "S"),
    ("^ss", "Short Sleeve"),
    ("^short sleeve", "Short Sleeve"),
    ("^ls", "Long Sleeve"),
    ("^long sleeve", "Long Sleeve"),
    ("^s$", "S"),
    ("^st$", "S"),
    ("^small.*$", "S"),
    ("^s/m.*$", "S/M"),
    ("^s/.*$", "S"),
    ("^s /.*$", "S"),
    ("^s .*$", "S"),
    ("^p", "S"),
    // Medium family
    ("^medium large", "M/L"),
    ("^medium_large", "M/L"),
    ("^m/l.*$", "M/L"),
    ("^m$", "M"),
    ("^mt$", "M"),
    ("^medium.*$", "M"),
    ("^.*med.*$", "M"),
    ("^m .*$", "M"),
    ("^m[a-z]*", "M"),
    // Large family
    ("^l/xl.*$", "L/XL"),
    ("^l$", "L"),
    ("^lt$", "L"),
    ("^.*lg.*$", "L"),
    ("^large.*$", "L"),
    ("^l .*$", "L"),
    ("^l/.*$", "L"),
    ("^g$", "L"),
    ("^g/.*$", "L"),
    // Extra-large family
    ("^xl/xxl.*$", "XL/2XL"),
    ("^xl/2x.*$", "XL/2XL"),
    ("^xl$", "XL"),
    ("^xlt$", "XL"),
    ("^xl.*$", "XL"),
    ("^x large.*$", "XL"),
    ("^extra large.*$", "XL"),
    ("^.* xl$", "XL"),
    ("^x-l.*$", "XL"),
    ("^l[a-z]*$", "XL"),
    ("^tg.*$", "XL"),
    ("^1x.*$", "XL"),
    ("^.* 1x$", "XL"),
    // 2XL family
    ("^2x$", "2XL"),
    ("^2xt$", "2XL"),
    ("^2xlt$", "2XL"),
    ("^2x.*$", "2XL"),
    ("^.* 2x$", "2XL"),
    ("^2tg.*$", "2XL"),
    ("^ttg.*$", "2XL"),
    ("^.* 2tg$", "2XL"),
    ("^.* ttg$", "2XL"),
    ("^xxl.*$", "2XL"),
    // Extended nXL ladder; numeric progression within the family is
    // refined by magnitude, so 9XL still sorts before 13X.
    ("^3x.*$", "3XL"),
    ("^xxxl.*$", "3XL"),
    ("^3tg.*$", "3XL"),
    ("^tttg.*$", "3XL"),
    ("^4x.*$", "4XL"),
    ("^xxxxl.*$", "4XL"),
    ("^5x.*$", "5XL"),
    ("^xxxxxl.*$", "5XL"),
    ("^6x.*$", "6XL"),
    ("^xxxxxxl.*$", "6XL"),
    ("^7x.*$", "7XL"),
    ("^xxxxxxxl.*$", "7XL"),
    ("^8x.*$", "8XL"),
    ("^xxxxxxxxl.*$", "8XL"),
    ("^9x.*$", "9XL"),
    ("^xxxxxxxxxl.*$", "9XL"),
    ("^10x.*$", "10XL"),
    ("^xxxxxxxxxxl.*$", "10XL"),
    ("^11x.*$", "11XL"),
    ("^xxxxxxxxxxxl.*$", "11XL"),
    ("^12x.*$", "12XL"),
    ("^xxxxxxxxxxxxl.*$", "12XL"),
    ("^13x.*$", "13XL"),
    ("^xxxxxxxxxxxxxl.*$", "13XL"),
    ("^14x.*$", "14XL"),
    ("^xxxxxxxxxxxxxxl.*$", "14XL"),
    ("^15x.*$", "15XL"),
    ("^xxxxxxxxxxxxxxxl.*$", "15XL"),
    ("^16x.*$", "16XL"),
    ("^xxxxxxxxxxxxxxxxl.*$", "16XL"),
    ("^17x.*$", "17XL"),
    ("^xxxxxxxxxxxxxxxxxl.*$", "17XL"),
    ("^18x.*$", "18XL"),
    ("^xxxxxxxxxxxxxxxxxxl.*$", "18XL"),
];

static BUILTIN_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    let defs: Vec<RuleDef> = BUILTIN_RULES
        .iter()
        .map(|(pattern, label)| RuleDef::new(*pattern, *label))
        .collect();
    RuleTable::compile(&defs).expect("built-in rule table patterns are valid")
});

/// One compiled rule: a pattern, its canonical label, and its rank.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: regex::Regex,
    label: String,
    rank: usize,
}

impl Rule {
    /// The rule's pattern source text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Canonical display label for everything this rule matches.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Zero-based table position; primary sort key for matches.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Whether this rule matches the given raw size text.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        self.regex.is_match(raw)
    }
}

/// An ordered, immutable sequence of compiled rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compiles an ordered rule definition list into a table.
    ///
    /// Rank is assigned from sequence position. Patterns are compiled
    /// case-insensitively, once, up front; classification never
    /// recompiles.
    ///
    /// # Errors
    ///
    /// Returns [`SizesError::InvalidRule`] for an unparseable pattern.
    pub fn compile(defs: &[RuleDef]) -> Result<Self> {
        let mut rules = Vec::with_capacity(defs.len());
        for (rank, def) in defs.iter().enumerate() {
            let regex = RegexBuilder::new(&def.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|err| SizesError::InvalidRule {
                    pattern: def.pattern.clone(),
                    reason: err.to_string(),
                })?;
            rules.push(Rule {
                regex,
                label: def.label.clone(),
                rank,
            });
        }
        Ok(Self { rules })
    }

    /// The process-wide built-in table, compiled on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    /// Returns the first rule matching `raw`, scanning in table order.
    #[must_use]
    pub fn first_match(&self, raw: &str) -> Option<&Rule> {
        let rule = self.rules.iter().find(|rule| rule.matches(raw));
        if let Some(rule) = rule {
            tracing::trace!(raw, pattern = rule.pattern(), rank = rule.rank, "rule hit");
        }
        rule
    }

    /// All rules in rank order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
