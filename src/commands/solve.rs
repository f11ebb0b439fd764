//! Puzzle solving command
//!
//! Solves one puzzle and records how long the search took.

use crate::puzzles::Puzzle;
use crate::solver::{SearchMode, SolverError, Solutions};
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub puzzle: Puzzle,
    pub mode: SearchMode,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            mode: SearchMode::Sequential,
        }
    }
}

/// Result of solving a puzzle
pub struct SolveReport {
    pub puzzle: Puzzle,
    pub mode: SearchMode,
    pub solutions: Solutions,
    pub duration: Duration,
}

/// Solve a puzzle with the configured search mode
///
/// # Errors
///
/// Returns an error if the puzzle's word pool does not fit its slots (wrong
/// word count or a word longer than the grid).
pub fn solve_puzzle(config: SolveConfig) -> Result<SolveReport, SolverError> {
    let solver = config.puzzle.solver()?;

    let start = Instant::now();
    let solutions = solver.solve_with(config.mode);
    let duration = start.elapsed();

    Ok(SolveReport {
        puzzle: config.puzzle,
        mode: config.mode,
        solutions,
        duration,
    })
}
