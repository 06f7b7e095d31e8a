//! Wrapping tree map and slope traversal.

use std::str::FromStr;

use crate::core::error::ParseError;

/// Rectangular map of tree cells.
///
/// The pattern repeats infinitely to the right, so column lookups wrap
/// modulo the width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeMap {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl TreeMap {
    /// Parse map rows of `.` (open) and `#` (tree).
    ///
    /// Every row must match the first row's width; an empty map, a ragged
    /// row, or any other character is a parse error.
    pub fn parse<'a, I>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut width = 0;
        for (index, line) in lines.into_iter().enumerate() {
            let number = index + 1;
            let mut row = Vec::with_capacity(width);
            for ch in line.chars() {
                match ch {
                    '.' => row.push(false),
                    '#' => row.push(true),
                    found => return Err(ParseError::UnknownMapChar { number, found }),
                }
            }
            if rows.is_empty() {
                width = row.len();
            } else if row.len() != width {
                return Err(ParseError::RaggedRow { number });
            }
            rows.push(row);
        }
        if width == 0 {
            return Err(ParseError::EmptyMap);
        }
        Ok(TreeMap { rows, width })
    }

    /// Count trees along a traversal from the top-left corner.
    ///
    /// Steps `slope.right` columns (wrapping) and `slope.down` rows per
    /// move until past the bottom row. The starting cell is counted.
    pub fn trees_on_slope(&self, slope: Slope) -> usize {
        let mut column = 0;
        let mut trees = 0;
        for row in self.rows.iter().step_by(slope.down) {
            if row[column] {
                trees += 1;
            }
            column = (column + slope.right) % self.width;
        }
        trees
    }

    /// Product of tree counts over several slopes.
    pub fn survey(&self, slopes: &[Slope]) -> u64 {
        slopes
            .iter()
            .map(|&slope| self.trees_on_slope(slope) as u64)
            .product()
    }
}

/// Traversal step: `right` columns and `down` rows per move.
///
/// Both steps are at least 1; the parser rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope {
    pub right: usize,
    pub down: usize,
}

/// The five standard survey slopes.
pub const SURVEY_SLOPES: [Slope; 5] = [
    Slope { right: 1, down: 1 },
    Slope { right: 3, down: 1 },
    Slope { right: 5, down: 1 },
    Slope { right: 7, down: 1 },
    Slope { right: 1, down: 2 },
];

impl FromStr for Slope {
    type Err = String;

    /// Parse `<right>,<down>`, e.g. `3,1`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (right, down) = input
            .split_once(',')
            .ok_or_else(|| format!("expected '<right>,<down>', got '{input}'"))?;
        let right = parse_step(right)?;
        let down = parse_step(down)?;
        Ok(Slope { right, down })
    }
}

fn parse_step(field: &str) -> Result<usize, String> {
    match field.parse::<usize>() {
        Ok(0) => Err("slope steps must be at least 1".to_string()),
        Ok(step) => Ok(step),
        Err(_) => Err(format!("'{field}' is not a positive integer")),
    }
}
