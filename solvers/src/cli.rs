//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::grid::{Slope, TreeMap};
use crate::core::policy::Policy;
use crate::core::record::parse_records;
use crate::core::tally::count_valid;
use crate::io::input::read_lines;

/// Count the records the chosen policy accepts and print the count.
pub fn count_passwords(input: &Path, policy: Policy) -> Result<()> {
    let lines = read_lines(input)?;
    let records = parse_records(lines.iter().map(String::as_str))
        .with_context(|| format!("parse {}", input.display()))?;
    debug!(records = records.len(), ?policy, "input parsed");
    let valid = count_valid(policy, &records)
        .with_context(|| format!("evaluate {}", input.display()))?;
    println!("{valid}");
    Ok(())
}

/// Count trees along the given slopes and print the answer.
///
/// A single slope prints its tree count; several slopes print the product
/// of their counts.
pub fn count_trees(input: &Path, slopes: &[Slope]) -> Result<()> {
    let lines = read_lines(input)?;
    let map = TreeMap::parse(lines.iter().map(String::as_str))
        .with_context(|| format!("parse {}", input.display()))?;
    for &slope in slopes {
        let trees = map.trees_on_slope(slope);
        debug!(right = slope.right, down = slope.down, trees, "slope tallied");
    }
    println!("{}", map.survey(slopes));
    Ok(())
}
