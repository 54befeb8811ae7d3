//! Core module - pure simulation logic.
//!
//! Grid representation, neighbour counting, the rule engine, bounded
//! history, and the pull-based runner. No terminal, file, or CLI concerns.

pub mod grid;
pub mod history;
pub mod rules;
pub mod sim;

pub use grid::{Grid, GridError};
pub use history::History;
pub use rules::{next_cell, next_generation};
pub use sim::{HaltReason, SimConfig, Simulation, Status};
