//! Errors raised while constructing a solver

use super::MAX_WORD_LEN;
use std::fmt;

/// Error type for an unsolvable puzzle definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The word pool is not exactly one longer than the slot list
    CountMismatch { slots: usize, words: usize },
    /// A word does not fit the grid
    WordTooLong(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch { .. } => write!(f, "must have 1 more word than slots"),
            Self::WordTooLong(word) => {
                write!(f, "{word} is more than {MAX_WORD_LEN} letters")
            }
        }
    }
}

impl std::error::Error for SolverError {}
