//! Crossword search
//!
//! Validates a puzzle definition and enumerates every arrangement of its word
//! pool across the slots.

mod engine;
mod error;
pub mod mode;
mod permutations;
mod solutions;

pub use engine::Solver;
pub use error::SolverError;
pub use mode::SearchMode;
pub use permutations::{Permutations, factorial};
pub use solutions::Solutions;

/// Longest word that fits the grid
pub const MAX_WORD_LEN: usize = crate::core::GRID_SIZE;
