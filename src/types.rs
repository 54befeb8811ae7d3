//! Shared types and default tunables.
//!
//! Pure data with no I/O or rendering dependencies.

/// Side length of a randomly filled grid.
pub const GRID_SIZE: usize = 20;

/// How many recent generations are remembered for repeat detection.
pub const HISTORY_SIZE: usize = 15;

/// Default cap on iterations beyond the initial generation.
pub const MAX_ITERATIONS: usize = 2000;

/// The run halts once a freshly derived generation already occurs this many
/// times within the remembered history.
pub const MAX_COPIES_IN_HISTORY: usize = 4;

/// Default delay between displayed generations, in milliseconds.
pub const DEFAULT_PAUSE_MS: u64 = 200;

/// Pattern marker for a live cell.
pub const ALIVE_MARKER: char = '*';

/// Pattern marker for a dead cell.
pub const DEAD_MARKER: char = '-';

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Parse a cell from its pattern marker.
    pub fn from_marker(ch: char) -> Option<Self> {
        match ch {
            ALIVE_MARKER => Some(Cell::Alive),
            DEAD_MARKER => Some(Cell::Dead),
            _ => None,
        }
    }

    /// Pattern marker for this cell.
    pub fn as_marker(self) -> char {
        match self {
            Cell::Alive => ALIVE_MARKER,
            Cell::Dead => DEAD_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_roundtrip() {
        assert_eq!(Cell::from_marker('*'), Some(Cell::Alive));
        assert_eq!(Cell::from_marker('-'), Some(Cell::Dead));
        assert_eq!(Cell::from_marker('x'), None);
        assert_eq!(Cell::Alive.as_marker(), '*');
        assert_eq!(Cell::Dead.as_marker(), '-');
    }

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }
}
