//! Main crossword solver interface

use super::{MAX_WORD_LEN, Permutations, SearchMode, SolverError, Solutions};
use crate::core::{Board, Placement, Slot};
use log::{debug, info};
use rayon::prelude::*;

/// Brute-force crossword slot solver
///
/// Holds a fixed slot list and a word pool with exactly one spare word. The
/// search tries every word as the spare and every ordering of the rest, so its
/// cost grows factorially with the pool; it is meant for single-digit slot
/// counts.
#[derive(Debug, Clone)]
pub struct Solver {
    slots: Vec<Slot>,
    words: Vec<String>,
}

impl Solver {
    /// Create a new solver for the given slots and word pool
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pool does not hold exactly one more word than there are slots
    /// - Any word is longer than the grid is wide
    ///
    /// # Examples
    /// ```
    /// use crossword_solver::core::{Direction, Slot};
    /// use crossword_solver::solver::{Solver, SolverError};
    ///
    /// let slots = vec![Slot::new(1, 1, Direction::Down), Slot::new(3, 1, Direction::Across)];
    ///
    /// let err = Solver::new(slots.clone(), ["hello", "world"]).unwrap_err();
    /// assert!(matches!(err, SolverError::CountMismatch { .. }));
    ///
    /// let solver = Solver::new(slots, ["hello", "ladies", "gentlemen"]).unwrap();
    /// let solutions = solver.solve();
    /// assert_eq!(solutions.extra_words(), ["gentlemen"]);
    /// ```
    pub fn new<W>(slots: Vec<Slot>, words: impl IntoIterator<Item = W>) -> Result<Self, SolverError>
    where
        W: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.len() != slots.len() + 1 {
            return Err(SolverError::CountMismatch {
                slots: slots.len(),
                words: words.len(),
            });
        }

        if let Some(word) = words.iter().find(|w| w.chars().count() > MAX_WORD_LEN) {
            return Err(SolverError::WordTooLong(word.clone()));
        }

        Ok(Self { slots, words })
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Run the full search on the current thread
    ///
    /// Calling this repeatedly reruns the search and yields identical results.
    #[must_use]
    pub fn solve(&self) -> Solutions {
        self.solve_with(SearchMode::Sequential)
    }

    /// Run the full search using the given mode
    ///
    /// Results are in canonical order regardless of mode.
    #[must_use]
    pub fn solve_with(&self, mode: SearchMode) -> Solutions {
        let extras = 0..self.words.len();
        let per_extra: Vec<(Vec<Board>, usize)> = match mode {
            SearchMode::Sequential => extras.map(|extra| self.search_extra(extra)).collect(),
            // Indexed parallel collect keeps pool order
            SearchMode::Parallel => extras
                .into_par_iter()
                .map(|extra| self.search_extra(extra))
                .collect(),
        };

        let mut solutions = Solutions::default();
        for (extra, (boards, examined)) in per_extra.into_iter().enumerate() {
            solutions.record(&self.words[extra], boards, examined);
        }

        info!(
            "{mode} search found {} solution(s) in {} board(s)",
            solutions.len(),
            solutions.examined()
        );
        solutions
    }

    /// Pool with the extra word's first occurrence (by value) removed
    fn remaining_words(&self, extra: usize) -> Vec<&str> {
        let removed = self
            .words
            .iter()
            .position(|w| *w == self.words[extra])
            .unwrap_or(extra);

        self.words
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != removed)
            .map(|(_, w)| w.as_str())
            .collect()
    }

    /// Valid boards with the word at `extra` left out, plus how many were tried
    fn search_extra(&self, extra: usize) -> (Vec<Board>, usize) {
        let remaining = self.remaining_words(extra);
        let mut examined = 0;

        let boards: Vec<Board> = Permutations::new(remaining.len())
            .map(|order| {
                examined += 1;
                self.build_board(&remaining, &order)
            })
            .filter(Board::is_valid)
            .collect();

        debug!(
            "extra word '{}': {} valid of {examined} board(s)",
            self.words[extra],
            boards.len()
        );
        (boards, examined)
    }

    /// Place `words[order[i]]` into slot `i` for every slot
    fn build_board(&self, words: &[&str], order: &[usize]) -> Board {
        Board::new(
            order
                .iter()
                .zip(&self.slots)
                .map(|(&i, &slot)| Placement::in_slot(words[i], slot))
                .collect(),
        )
    }
}
