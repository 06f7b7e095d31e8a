//! Typed failure modes for parsing and policy evaluation.

use thiserror::Error;

/// Errors raised while parsing input lines into domain types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Rule string does not match `<int>-<int> <char>`.
    #[error("malformed rule '{input}': {reason}")]
    MalformedRule { input: String, reason: String },

    /// Line does not contain exactly one `": "` delimiter.
    #[error("line {number}: expected exactly one ': ' delimiter")]
    MalformedRecord { number: usize },

    /// Map input has no rows, or a first row with no columns.
    #[error("map is empty")]
    EmptyMap,

    /// Map row contains a character other than `.` or `#`.
    #[error("line {number}: unknown map character '{found}'")]
    UnknownMapChar { number: usize, found: char },

    /// Map row width differs from the first row's.
    #[error("line {number}: row width differs from the first row")]
    RaggedRow { number: usize },
}

/// Errors raised while evaluating a policy against a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A 1-based position points past the end of the subject.
    #[error("position {position} is out of range for a {length}-character subject")]
    OutOfRange { position: usize, length: usize },
}
