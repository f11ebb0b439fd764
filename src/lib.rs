//! Crossword Solver
//!
//! Fits a pool of words into fixed crossword slots so that every word crosses
//! another on a matching letter, with exactly one word left over.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_solver::core::{Direction, Slot};
//! use crossword_solver::solver::Solver;
//!
//! let slots = vec![Slot::new(1, 1, Direction::Down), Slot::new(3, 1, Direction::Across)];
//! let solver = Solver::new(slots, ["hello", "ladies", "gentlemen"]).unwrap();
//!
//! let solutions = solver.solve();
//! assert_eq!(solutions.extra_words(), ["gentlemen"]);
//! println!("{}", solutions.solutions()[0]);
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod solver;

// Puzzle files and embedded samples
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
mod testing;
