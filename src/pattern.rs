//! Pattern parsing - turns marker text into grids.
//!
//! Recognised markers: `*` alive, `-` dead. Blank lines are skipped, spaces
//! read as dead cells, and any other character is rejected. Ragged rows are
//! padded by grid construction. String patterns ignore indentation (embedded
//! literals are usually indented); file patterns keep leading spaces as dead
//! cells so hand-drawn column offsets survive.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::grid::{Grid, GridError};
use crate::types::Cell;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid character {ch:?} in pattern (expected '*' or '-')")]
    InvalidSymbol { ch: char },
    #[error("pattern files must use the .txt extension")]
    NotATextFile,
    #[error(transparent)]
    Empty(#[from] GridError),
    #[error("failed to read pattern file")]
    Io(#[from] std::io::Error),
}

/// Parse marker text into a grid. Lines are trimmed first, so indented
/// string literals parse without a leading band of dead cells.
pub fn parse_pattern(text: &str) -> Result<Grid, PatternError> {
    parse_lines(text.lines().map(str::trim))
}

/// Load a pattern from a `.txt` file.
///
/// Unlike [`parse_pattern`], leading spaces stay in place as dead cells, so a
/// shape drawn at a column offset keeps that offset.
pub fn load_pattern_file(path: impl AsRef<Path>) -> Result<Grid, PatternError> {
    let path = path.as_ref();
    if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
        return Err(PatternError::NotATextFile);
    }
    let text = fs::read_to_string(path)?;
    parse_lines(text.lines().map(str::trim_end))
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Grid, PatternError> {
    let mut rows = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(line.len());
        for ch in line.chars() {
            if ch == ' ' {
                row.push(Cell::Dead);
            } else {
                row.push(Cell::from_marker(ch).ok_or(PatternError::InvalidSymbol { ch })?);
            }
        }
        rows.push(row);
    }

    Ok(Grid::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented_multiline_pattern() {
        let grid = parse_pattern(
            "
            *-*-*
            -**
            *--
            -
            -**
            ",
        )
        .unwrap();

        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.get(0, 0), Some(Cell::Alive));
        assert_eq!(grid.get(4, 0), Some(Cell::Alive));
        assert_eq!(grid.get(1, 1), Some(Cell::Alive));
        assert_eq!(grid.get(4, 1), Some(Cell::Dead));
    }

    #[test]
    fn test_interior_space_reads_as_dead() {
        let grid = parse_pattern("---\n** *\n***\n").unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        let row1: Vec<char> = grid.iter_rows().nth(1).unwrap().iter().map(|c| c.as_marker()).collect();
        assert_eq!(row1, vec!['*', '*', '-', '*']);
    }

    #[test]
    fn test_invalid_symbol_is_rejected() {
        let err = parse_pattern("*-x\n---").unwrap_err();
        assert!(matches!(err, PatternError::InvalidSymbol { ch: 'x' }));
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(matches!(parse_pattern(""), Err(PatternError::Empty(_))));
        assert!(matches!(parse_pattern("\n  \n"), Err(PatternError::Empty(_))));
    }

    #[test]
    fn test_non_txt_file_is_rejected() {
        let err = load_pattern_file("pattern.rle").unwrap_err();
        assert!(matches!(err, PatternError::NotATextFile));
    }
}
