// Core pipeline - integer extraction, dedup, and ordering

use std::collections::BTreeSet;

/// Lowest value the pipeline accepts.
pub const MIN_VALUE: i32 = -1023;
/// Highest value the pipeline accepts.
pub const MAX_VALUE: i32 = 1023;

/// Returns true if `token` is an integer literal: an optional leading
/// sign followed by one or more ASCII digits and nothing else.
///
/// Rejects fractional forms ("1.5"), exponent notation ("1e3"),
/// embedded non-digits, and a bare sign with no digits.
pub fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Extracts the unique in-range integers from `text`, sorted ascending.
///
/// Each line is expected to carry exactly one whitespace-delimited
/// token. Lines that are blank, hold more than one token, or hold a
/// token that is not an integer inside [MIN_VALUE, MAX_VALUE] are
/// dropped without a diagnostic; bad content never fails the parse.
pub fn parse_unique_sorted(text: &str) -> Vec<i32> {
    let mut accepted = BTreeSet::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let token = match (tokens.next(), tokens.next()) {
            (Some(token), None) => token,
            _ => continue, // more than one value on the line
        };

        if !is_integer_literal(token) {
            continue;
        }

        // A literal too wide for i32 is out of range by definition.
        let value = match token.parse::<i32>() {
            Ok(value) => value,
            Err(_) => continue,
        };

        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            accepted.insert(value);
        }
    }

    accepted.into_iter().collect()
}
