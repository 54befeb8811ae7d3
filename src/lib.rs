//! Conway's Game of Life: simulation core plus terminal front end.
//!
//! `core` holds the pure engine (grids, the B3/S23 rule step, bounded
//! history, and the pull-based runner). `pattern` and `presets` build
//! initial grids; `term` renders generations.

pub mod core;
pub mod pattern;
pub mod presets;
pub mod term;
pub mod types;
