//! Built-in starting patterns.
//!
//! A small collection of well-known still lifes, oscillators, and
//! spaceships, stored as marker text and parsed on lookup.

use rand::Rng;

use crate::core::grid::Grid;
use crate::pattern::parse_pattern;

const BLOCK: &str = "
    ------
    --**--
    --**--
    ------
";

const BLINKER: &str = "
    -----
    -----
    -***-
    -----
    -----
";

const TOAD: &str = "
    ------
    ------
    --***-
    -***--
    ------
    ------
";

const BEACON: &str = "
    ------
    -**---
    -**---
    ---**-
    ---**-
    ------
";

const GLIDER: &str = "
    -*----------
    --*---------
    ***---------
    ------------
    ------------
    ------------
    ------------
    ------------
    ------------
    ------------
    ------------
    ------------
";

const PULSAR: &str = "
    -----------------
    -----------------
    ----***---***----
    -----------------
    --*----*-*----*--
    --*----*-*----*--
    --*----*-*----*--
    ----***---***----
    -----------------
    ----***---***----
    --*----*-*----*--
    --*----*-*----*--
    --*----*-*----*--
    -----------------
    ----***---***----
    -----------------
    -----------------
";

const R_PENTOMINO: &str = "
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
    ----------**--------
    ---------**---------
    ----------*---------
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
    --------------------
";

/// Preset names with their marker text, in display order.
pub const PRESETS: &[(&str, &str)] = &[
    ("block", BLOCK),
    ("blinker", BLINKER),
    ("toad", TOAD),
    ("beacon", BEACON),
    ("glider", GLIDER),
    ("pulsar", PULSAR),
    ("r-pentomino", R_PENTOMINO),
];

/// Names of all built-in presets.
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

/// Look up a preset by name, case-insensitively.
pub fn by_name(name: &str) -> Option<Grid> {
    let wanted = name.to_lowercase();
    PRESETS
        .iter()
        .find(|(name, _)| *name == wanted)
        .and_then(|(_, text)| parse_pattern(text).ok())
}

/// Pick a random preset; returns its name alongside the grid.
///
/// `None` only if every preset failed to parse, which the test suite rules
/// out for the shipped collection.
pub fn pick_random(rng: &mut impl Rng) -> Option<(&'static str, Grid)> {
    let valid: Vec<(&'static str, Grid)> = PRESETS
        .iter()
        .filter_map(|(name, text)| parse_pattern(text).ok().map(|grid| (*name, grid)))
        .collect();
    if valid.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..valid.len());
    valid.into_iter().nth(idx)
}
