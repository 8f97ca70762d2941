//! Numeric quantity extraction from raw size text.
//!
//! Used both as the fallback rank for strings no rule matches and as
//! the fine-grained magnitude key for strings a rule does match. The
//! extraction degrades in stages and never fails; anything without a
//! usable number comes back as 0.

/// Fractional digits kept when parsing decimal quantities.
const PRECISION: i32 = 8;

/// Extracts a numeric quantity from raw size text.
///
/// Attempts, in order:
/// 1. Strict whole-string decimal parse (handles `7.5`).
/// 2. Whitespace tokenization: purely alphabetic tokens (unit words
///    like `EU` or `Unfinished`) are dropped, the numeric part of each
///    remaining token is parsed, and the results are summed (so `18W`
///    yields 18).
/// 3. Last resort: strip every non-digit character from the whole
///    string and take the leading integer. For multi-number strings
///    such as `16W-18W` this yields the first number; that coarseness
///    is inherited, documented behavior.
pub(crate) fn quantity(raw: &str) -> f64 {
    if let Some(value) = parse_decimal(raw) {
        return value;
    }
    let mut sum = 0.0;
    let mut parsed_any = false;
    for token in raw.split_whitespace() {
        if token.chars().all(|ch| ch.is_ascii_alphabetic()) {
            continue;
        }
        if let Some(value) = parse_decimal(&strip_non_numeric(token)) {
            sum += value;
            parsed_any = true;
        }
    }
    if parsed_any && sum.is_finite() {
        return round_to_precision(sum);
    }
    parse_leading_int(&strip_non_numeric(raw)).unwrap_or(0) as f64
}

/// Strict decimal parse: trailing non-numeric content rejects the token.
fn parse_decimal(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(round_to_precision)
}

fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(PRECISION);
    (value * factor).round() / factor
}

/// Keeps digits, decimal points, and minus signs only.
fn strip_non_numeric(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect()
}

/// Parses an optional sign followed by a digit run, ignoring the rest.
fn parse_leading_int(text: &str) -> Option<i64> {
    let mut chars = text.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };
    let mut value: i64 = 0;
    let mut seen_digit = false;
    while let Some(&ch) = chars.peek() {
        let Some(digit) = ch.to_digit(10) else { break };
        value = value.checked_mul(10)?.checked_add(i64::from(digit))?;
        seen_digit = true;
        chars.next();
    }
    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
