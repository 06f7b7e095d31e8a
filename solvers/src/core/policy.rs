//! The two record predicates.

use crate::core::error::EvalError;
use crate::core::record::Record;

/// Predicate variant applied to each record.
///
/// Selected explicitly at the call site; both variants read the same
/// `Rule` fields but give them different meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Valid iff the letter occurs between `first` and `second` times
    /// (inclusive) in the subject.
    OccurrenceCount,
    /// Valid iff exactly one of the 1-based positions `first` and `second`
    /// holds the letter.
    ExclusivePosition,
}

impl Policy {
    /// Evaluate the predicate for one record.
    ///
    /// Counting is case-sensitive. Positions index characters, not bytes,
    /// and a position past the end of the subject is an error rather than
    /// a silent mismatch.
    pub fn allows(self, record: &Record) -> Result<bool, EvalError> {
        let rule = &record.rule;
        match self {
            Policy::OccurrenceCount => {
                let occurrences = record
                    .subject
                    .chars()
                    .filter(|&ch| ch == rule.letter)
                    .count();
                Ok(occurrences >= rule.first && occurrences <= rule.second)
            }
            Policy::ExclusivePosition => {
                let at_first = letter_at(&record.subject, rule.first)?;
                let at_second = letter_at(&record.subject, rule.second)?;
                Ok((at_first == rule.letter) ^ (at_second == rule.letter))
            }
        }
    }
}

/// Character at a 1-based position. Positions are positive by the rule
/// parser's invariant.
fn letter_at(subject: &str, position: usize) -> Result<char, EvalError> {
    subject
        .chars()
        .nth(position - 1)
        .ok_or(EvalError::OutOfRange {
            position,
            length: subject.chars().count(),
        })
}
