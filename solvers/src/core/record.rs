//! One input line: a rule and the subject string it applies to.

use crate::core::error::ParseError;
use crate::core::rule::Rule;

/// Delimiter between the rule and the subject.
const DELIMITER: &str = ": ";

/// One parsed input line. No mutation after parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub rule: Rule,
    pub subject: String,
}

impl Record {
    /// Parse one line of the form `<int>-<int> <char>: <subject>`.
    ///
    /// The `": "` delimiter must occur exactly once; the subject is taken
    /// verbatim. `number` is the 1-based line number used in diagnostics.
    pub fn parse(line: &str, number: usize) -> Result<Self, ParseError> {
        let (rule, subject) = line
            .split_once(DELIMITER)
            .ok_or(ParseError::MalformedRecord { number })?;
        if subject.contains(DELIMITER) {
            return Err(ParseError::MalformedRecord { number });
        }
        let rule: Rule = rule.parse()?;
        Ok(Record {
            rule,
            subject: subject.to_string(),
        })
    }
}

/// Parse a whole input into records.
///
/// Aborts on the first malformed line: a bad line anywhere fails the run
/// rather than being silently skipped.
pub fn parse_records<'a, I>(lines: I) -> Result<Vec<Record>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| Record::parse(line, index + 1))
        .collect()
}
