//! Grid module - a rectangular field of dead and alive cells.
//!
//! Uses flat row-major storage with (x, y) indexing: x ranges over columns
//! (left to right), y over rows (top to bottom).
//! A grid never mutates after construction; every derived generation is a
//! new `Grid` value.

use rand::Rng;
use thiserror::Error;

use crate::types::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The pattern contained no rows, or only empty rows.
    #[error("pattern contains no cells")]
    EmptyPattern,
}

/// A rectangular arrangement of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    /// Flat cells, row-major (y * cols + x).
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from parsed rows.
    ///
    /// Ragged rows are right-padded with dead cells up to the longest row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        if cols == 0 {
            return Err(GridError::EmptyPattern);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            cells.extend_from_slice(row);
            cells.resize(cells.len() + (cols - row.len()), Cell::Dead);
        }

        Ok(Self {
            cols,
            rows: rows.len(),
            cells,
        })
    }

    /// A `size x size` grid of independently, uniformly random cells.
    pub fn random(size: usize, rng: &mut impl Rng) -> Self {
        let size = size.max(1);
        let cells = (0..size * size)
            .map(|_| if rng.gen() { Cell::Alive } else { Cell::Dead })
            .collect();
        Self {
            cols: size,
            rows: size,
            cells,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    /// Cell at (x, y), or `None` out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Iterate rows top to bottom, each row a slice of cells left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Count of live cells in the whole grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Live cells among the eight Moore neighbours of (x, y).
    ///
    /// Out-of-bounds neighbours are excluded; there is no wraparound.
    /// Pure query, callable outside any simulation run.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        // N, E, S, W, then the four diagonals.
        const OFFSETS: [(i32, i32); 8] = [
            (0, -1),
            (1, 0),
            (0, 1),
            (-1, 0),
            (-1, -1),
            (1, -1),
            (1, 1),
            (-1, 1),
        ];

        OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.get(x + dx, y + dy).is_some_and(Cell::is_alive))
            .count() as u8
    }

    /// A new grid of identical dimensions where each cell is `f(x, y, cell)`.
    pub fn map(&self, mut f: impl FnMut(i32, i32, Cell) -> Cell) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.rows as i32 {
            for x in 0..self.cols as i32 {
                cells.push(f(x, y, self.cells[y as usize * self.cols + x as usize]));
            }
        }
        Self {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }
}
