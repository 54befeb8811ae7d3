//! History tracking - a bounded window of recent generations.
//!
//! The window exists only for equality-based repeat counting; it is never
//! used for rollback.

use std::collections::VecDeque;

use crate::core::grid::Grid;

/// Fixed-capacity FIFO of grid snapshots, oldest evicted first.
#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    snapshots: VecDeque<Grid>,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            snapshots: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Remember a generation, evicting the oldest once full.
    pub fn push(&mut self, grid: Grid) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(grid);
    }

    /// How many remembered generations are structurally equal to `grid`.
    pub fn occurrences(&self, grid: &Grid) -> usize {
        self.snapshots.iter().filter(|g| *g == grid).count()
    }
}
