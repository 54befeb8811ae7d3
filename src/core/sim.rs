//! Simulation runner - the iteration loop and its halting policy.
//!
//! Generations are produced on demand through `Iterator`, so the consumer
//! controls pacing and may simply stop pulling; that early stop is the
//! `Interrupted` halt reason, not an error. A run is forward-only and
//! exclusively owns its grid, history, and counters.

use crate::core::grid::Grid;
use crate::core::history::History;
use crate::core::rules::next_generation;
use crate::types::{HISTORY_SIZE, MAX_COPIES_IN_HISTORY, MAX_ITERATIONS};

/// Why a run stopped producing generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// A generation recurred `repeat_threshold` times within the history window.
    RepeatedPattern,
    /// The iteration cap was reached.
    IterationLimit,
    /// The consumer stopped pulling before a terminal condition.
    Interrupted,
}

impl HaltReason {
    /// Human-readable sentence for the end-of-run summary.
    pub fn describe(self) -> &'static str {
        match self {
            HaltReason::RepeatedPattern => "a repeated pattern",
            HaltReason::IterationLimit => "the iteration limit",
            HaltReason::Interrupted => "user interruption",
        }
    }
}

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    Running,
    Halted(HaltReason),
}

/// Tunables for one run. Passed in at construction; there is no global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Iterations beyond the initial generation before the run halts.
    pub max_iterations: usize,
    /// How many recent generations are remembered.
    pub history_size: usize,
    /// Occurrence count in history that triggers the repeated-pattern halt.
    pub repeat_threshold: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            history_size: HISTORY_SIZE,
            repeat_threshold: MAX_COPIES_IN_HISTORY,
        }
    }
}

/// A single forward-only run of the simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    history: History,
    config: SimConfig,
    iterations: usize,
    status: Status,
}

impl Simulation {
    pub fn new(initial: Grid, config: SimConfig) -> Self {
        Self {
            current: initial,
            history: History::new(config.history_size),
            config,
            iterations: 0,
            status: Status::NotStarted,
        }
    }

    /// Completed iterations so far. The initial generation counts as zero.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Terminal reason, or `None` while the run can still produce generations.
    pub fn halt_reason(&self) -> Option<HaltReason> {
        match self.status {
            Status::Halted(reason) => Some(reason),
            _ => None,
        }
    }

    /// The most recently produced generation (the initial grid before that).
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Record a caller-driven stop. No-op once the run has already halted.
    pub fn stop(&mut self) {
        if !matches!(self.status, Status::Halted(_)) {
            self.status = Status::Halted(HaltReason::Interrupted);
        }
    }
}

impl Iterator for Simulation {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        match self.status {
            Status::NotStarted => {
                // The initial generation is shown but does not count as an
                // iteration. It still enters history so patterns that never
                // evolve are caught.
                self.status = Status::Running;
                self.history.push(self.current.clone());
                Some(self.current.clone())
            }
            Status::Running => {
                if self.iterations == self.config.max_iterations {
                    self.status = Status::Halted(HaltReason::IterationLimit);
                    return None;
                }

                let candidate = next_generation(&self.current);

                // Counted before the candidate is appended; the generation
                // that reaches the threshold is never emitted.
                if self.history.occurrences(&candidate) == self.config.repeat_threshold {
                    self.status = Status::Halted(HaltReason::RepeatedPattern);
                    return None;
                }

                self.iterations += 1;
                self.history.push(candidate.clone());
                self.current = candidate;
                Some(self.current.clone())
            }
            Status::Halted(_) => None,
        }
    }
}
