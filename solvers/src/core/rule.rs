//! The numeric-bounds-plus-letter rule at the front of each record line.

use std::str::FromStr;

use crate::core::error::ParseError;

/// Parsed rule: two positive bounds and a letter.
///
/// What the bounds mean depends on the policy evaluating the record: an
/// inclusive occurrence range, or a pair of 1-based positions. Immutable
/// once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub first: usize,
    pub second: usize,
    pub letter: char,
}

impl FromStr for Rule {
    type Err = ParseError;

    /// Parse `<int>-<int> <char>`, e.g. `1-3 a`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| ParseError::MalformedRule {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (first, rest) = input
            .split_once('-')
            .ok_or_else(|| malformed("missing '-' between bounds"))?;
        let (second, letter) = rest
            .split_once(' ')
            .ok_or_else(|| malformed("missing ' ' before the letter"))?;

        let first =
            parse_bound(first).ok_or_else(|| malformed("first bound must be a positive integer"))?;
        let second = parse_bound(second)
            .ok_or_else(|| malformed("second bound must be a positive integer"))?;

        let mut chars = letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return Err(malformed("letter must be exactly one character")),
        };

        Ok(Rule {
            first,
            second,
            letter,
        })
    }
}

/// Bounds are occurrence minimums or 1-based positions; zero never appears
/// in valid inputs.
fn parse_bound(field: &str) -> Option<usize> {
    match field.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(bound) => Some(bound),
    }
}
