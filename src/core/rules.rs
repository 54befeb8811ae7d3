//! Rule engine - derives the next generation under the standard B3/S23 rules.
//!
//! Every cell's fate is decided from the pre-step grid, so updates within a
//! step never observe each other (synchronous update semantics).

use crate::core::grid::Grid;
use crate::types::Cell;

/// Next state of one cell given its live-neighbour count.
///
/// - live cell with 2 or 3 live neighbours survives
/// - dead cell with exactly 3 live neighbours is born
/// - everything else is dead
pub fn next_cell(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Derive the whole next generation. Dimensions are preserved.
pub fn next_generation(grid: &Grid) -> Grid {
    grid.map(|x, y, cell| next_cell(cell, grid.live_neighbors(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_pattern;

    #[test]
    fn test_next_cell_rule_table() {
        assert_eq!(next_cell(Cell::Alive, 2), Cell::Alive);
        assert_eq!(next_cell(Cell::Alive, 3), Cell::Alive);
        assert_eq!(next_cell(Cell::Alive, 1), Cell::Dead);
        assert_eq!(next_cell(Cell::Alive, 4), Cell::Dead);
        assert_eq!(next_cell(Cell::Dead, 3), Cell::Alive);
        assert_eq!(next_cell(Cell::Dead, 2), Cell::Dead);
        assert_eq!(next_cell(Cell::Dead, 8), Cell::Dead);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = parse_pattern(
            "-----\n\
             -----\n\
             -***-\n\
             -----\n\
             -----",
        )
        .unwrap();
        let vertical = parse_pattern(
            "-----\n\
             --*--\n\
             --*--\n\
             --*--\n\
             -----",
        )
        .unwrap();

        let step1 = next_generation(&horizontal);
        assert_eq!(step1, vertical);
        let step2 = next_generation(&step1);
        assert_eq!(step2, horizontal);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = parse_pattern(
            "----\n\
             -**-\n\
             -**-\n\
             ----",
        )
        .unwrap();

        let mut current = block.clone();
        for _ in 0..10 {
            current = next_generation(&current);
            assert_eq!(current, block);
        }
    }

    #[test]
    fn test_updates_are_synchronous_within_a_step() {
        // An L of three live cells becomes a block in one step. A sequential
        // (in-place) update would let the newborn corner influence its
        // neighbours mid-step and diverge.
        let corner = parse_pattern(
            "----\n\
             -**-\n\
             -*--\n\
             ----",
        )
        .unwrap();
        let block = parse_pattern(
            "----\n\
             -**-\n\
             -**-\n\
             ----",
        )
        .unwrap();

        assert_eq!(next_generation(&corner), block);
    }

    #[test]
    fn test_dimensions_are_preserved() {
        let grid = parse_pattern("***\n---").unwrap();
        let next = next_generation(&grid);
        assert_eq!(next.rows(), 2);
        assert_eq!(next.cols(), 3);
    }
}
