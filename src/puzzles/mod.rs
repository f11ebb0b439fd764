//! Puzzle definitions
//!
//! A puzzle is a slot list plus a word pool. Puzzles are read from a small
//! plain-text format or taken from the samples embedded at build time:
//!
//! ```text
//! # comment
//! [slots]
//! 1 1 down
//! 3 1 across
//!
//! [words]
//! hello ladies
//! gentlemen
//! ```

mod embedded;
pub mod loader;

pub use embedded::PUZZLES;

use crate::core::Slot;
use crate::solver::{Solver, SolverError};
use std::fmt;
use std::io;

/// Slots and word pool read from a puzzle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub slots: Vec<Slot>,
    pub words: Vec<String>,
}

impl Puzzle {
    /// Build a solver for this puzzle
    ///
    /// # Errors
    ///
    /// Returns the solver's validation error if the word pool does not fit
    /// the slots.
    pub fn solver(&self) -> Result<Solver, SolverError> {
        Solver::new(self.slots.clone(), self.words.iter().cloned())
    }
}

/// Error type for unreadable puzzle definitions
#[derive(Debug)]
pub enum PuzzleError {
    Io(io::Error),
    MissingSection(&'static str),
    InvalidSlot { line: usize, reason: String },
    UnexpectedLine { line: usize, text: String },
    UnknownPuzzle(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read puzzle: {e}"),
            Self::MissingSection(name) => write!(f, "Puzzle has no [{name}] section"),
            Self::InvalidSlot { line, reason } => write!(f, "Line {line}: {reason}"),
            Self::UnexpectedLine { line, text } => {
                write!(f, "Line {line}: unexpected '{text}' outside a section")
            }
            Self::UnknownPuzzle(name) => write!(f, "No embedded puzzle named '{name}'"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PuzzleError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
