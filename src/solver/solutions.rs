//! Result bundle produced by a completed search

use crate::core::Board;

/// Every valid board found by a search, paired with the word left out of it
///
/// Solutions are kept in search order: extra words in pool order, and within
/// one extra word, permutations in lexicographic position order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solutions {
    solutions: Vec<Board>,
    extra_words: Vec<String>,
    examined: usize,
}

impl Solutions {
    /// Append the valid boards found with `extra` left out
    pub(crate) fn record(&mut self, extra: &str, boards: Vec<Board>, examined: usize) {
        self.extra_words
            .extend(std::iter::repeat_n(extra.to_string(), boards.len()));
        self.solutions.extend(boards);
        self.examined += examined;
    }

    /// Valid boards in search order
    #[must_use]
    pub fn solutions(&self) -> &[Board] {
        &self.solutions
    }

    /// Extra word for each board of [`Self::solutions`], index for index
    #[must_use]
    pub fn extra_words(&self) -> &[String] {
        &self.extra_words
    }

    /// Number of candidate boards built and checked
    #[must_use]
    pub const fn examined(&self) -> usize {
        self.examined
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Boards paired with their extra word
    pub fn iter(&self) -> impl Iterator<Item = (&Board, &str)> {
        self.solutions
            .iter()
            .zip(self.extra_words.iter().map(String::as_str))
    }
}
