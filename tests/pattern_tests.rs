//! Pattern tests - parsing from text and files.

use std::fs;
use std::path::PathBuf;

use tui_life::pattern::{self, PatternError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tui-life-test-{}-{name}", std::process::id()))
}

#[test]
fn test_pattern_is_read_from_a_text_file() {
    let path = temp_path("grid.txt");
    fs::write(&path, "---\n** *\n***\n").unwrap();

    let grid = pattern::load_pattern_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 4);
    let rows: Vec<String> = grid
        .iter_rows()
        .map(|row| row.iter().map(|c| c.as_marker()).collect())
        .collect();
    assert_eq!(rows, vec!["----", "**-*", "***-"]);
}

#[test]
fn test_leading_spaces_in_a_file_keep_the_shape_offset() {
    let path = temp_path("offset.txt");
    fs::write(&path, "----\n  **\n  **\n").unwrap();

    let grid = pattern::load_pattern_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let rows: Vec<String> = grid
        .iter_rows()
        .map(|row| row.iter().map(|c| c.as_marker()).collect())
        .collect();
    assert_eq!(rows, vec!["----", "--**", "--**"]);
}

#[test]
fn test_non_txt_extension_is_rejected() {
    let path = temp_path("grid.rle");
    fs::write(&path, "---\n***\n").unwrap();

    let err = pattern::load_pattern_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, PatternError::NotATextFile));
}

#[test]
fn test_missing_file_surfaces_io_error() {
    let err = pattern::load_pattern_file(temp_path("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, PatternError::Io(_)));
}

#[test]
fn test_invalid_symbol_in_file_is_rejected() {
    let path = temp_path("bad.txt");
    fs::write(&path, "--#\n***\n").unwrap();

    let err = pattern::load_pattern_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, PatternError::InvalidSymbol { ch: '#' }));
}
