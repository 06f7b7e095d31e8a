//! Input file reading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read an input file into lines.
///
/// Line terminators (`\n`, `\r\n`) are stripped and trailing blank lines
/// are dropped, so a final newline (or its absence) never changes the
/// parsed input.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_input(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("input.txt");
        fs::write(&path, contents).expect("write input");
        path
    }

    #[test]
    fn reads_lines_without_terminators() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_input(temp.path(), "1-3 a: abcde\n1-3 b: cdefg\n");
        let lines = read_lines(&path).expect("read");
        assert_eq!(lines, vec!["1-3 a: abcde", "1-3 b: cdefg"]);
    }

    #[test]
    fn strips_carriage_returns() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_input(temp.path(), "..##\r\n#...\r\n");
        let lines = read_lines(&path).expect("read");
        assert_eq!(lines, vec!["..##", "#..."]);
    }

    #[test]
    fn drops_trailing_blank_lines() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_input(temp.path(), "1-3 a: abcde\n\n\n");
        let lines = read_lines(&path).expect("read");
        assert_eq!(lines, vec!["1-3 a: abcde"]);
    }

    #[test]
    fn keeps_interior_blank_lines() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_input(temp.path(), "a\n\nb\n");
        let lines = read_lines(&path).expect("read");
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn missing_file_errors_with_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = read_lines(&temp.path().join("missing.txt")).expect_err("missing file");
        assert!(err.to_string().contains("missing.txt"));
    }
}
