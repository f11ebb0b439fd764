//! A word laid into the grid
//!
//! A Placement binds a word to a starting cell and direction and keeps a map
//! from every cell it covers to the letter written there.

use super::{Direction, Slot};
use rustc_hash::FxHashMap;
use std::fmt;

/// A 1-based grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of intersecting two placements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    /// The placements share no cell
    NoOverlap,
    /// The placements share a cell but write different letters there
    Incompatible,
    /// The placements share this cell and agree on its letter
    Overlap(Coord),
}

impl Intersection {
    /// The shared coordinate, if the overlap is compatible
    #[inline]
    #[must_use]
    pub const fn coord(self) -> Option<Coord> {
        match self {
            Self::Overlap(coord) => Some(coord),
            Self::NoOverlap | Self::Incompatible => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_compatible(self) -> bool {
        matches!(self, Self::Overlap(_))
    }
}

/// A word placed at a position with a direction
///
/// Cells are computed eagerly and never bounds-checked; a placement running off
/// the grid is still a valid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: String,
    row: usize,
    col: usize,
    direction: Direction,
    coords: FxHashMap<Coord, char>,
}

impl Placement {
    /// Lay `word` out starting at `(row, col)`
    ///
    /// # Examples
    /// ```
    /// use crossword_solver::core::{Coord, Direction, Placement};
    ///
    /// let placement = Placement::new("hello", 1, 1, Direction::Down);
    /// assert_eq!(placement.char_at(Coord::new(3, 1)), Some('l'));
    /// assert_eq!(placement.char_at(Coord::new(1, 2)), None);
    /// ```
    #[must_use]
    pub fn new(word: impl Into<String>, row: usize, col: usize, direction: Direction) -> Self {
        let word = word.into();
        let coords = cells(&word, row, col, direction).collect();

        Self {
            word,
            row,
            col,
            direction,
            coords,
        }
    }

    /// Lay `word` into `slot`
    #[must_use]
    pub fn in_slot(word: impl Into<String>, slot: Slot) -> Self {
        Self::new(word, slot.row, slot.col, slot.direction)
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Map from every covered cell to its letter
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &FxHashMap<Coord, char> {
        &self.coords
    }

    /// Letter written at `coord`, if this placement covers it
    #[inline]
    #[must_use]
    pub fn char_at(&self, coord: Coord) -> Option<char> {
        self.coords.get(&coord).copied()
    }

    /// Covered cells in letter order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        cells(&self.word, self.row, self.col, self.direction)
    }

    /// Check where this placement crosses `other`
    ///
    /// Only the first shared cell (in this placement's letter order) is
    /// compared. Two straight words share more than one cell only when they
    /// are collinear, and such overlaps are judged on that first cell alone.
    ///
    /// # Examples
    /// ```
    /// use crossword_solver::core::{Coord, Direction, Intersection, Placement};
    ///
    /// let hello = Placement::new("hello", 2, 4, Direction::Down);
    ///
    /// let world = Placement::new("world", 5, 1, Direction::Across);
    /// assert_eq!(hello.intersection(&world), Intersection::Overlap(Coord::new(5, 4)));
    ///
    /// let work = Placement::new("work", 5, 1, Direction::Across);
    /// assert_eq!(hello.intersection(&work), Intersection::Incompatible);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Intersection {
        let shared = self
            .cells()
            .find_map(|(coord, mine)| other.char_at(coord).map(|theirs| (coord, mine, theirs)));

        match shared {
            None => Intersection::NoOverlap,
            Some((coord, mine, theirs)) if mine == theirs => Intersection::Overlap(coord),
            Some(_) => Intersection::Incompatible,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' - [{}, {}] - {}",
            self.word, self.row, self.col, self.direction
        )
    }
}

fn cells(
    word: &str,
    row: usize,
    col: usize,
    direction: Direction,
) -> impl Iterator<Item = (Coord, char)> + '_ {
    let (row_step, col_step) = direction.step();
    word.chars()
        .enumerate()
        .map(move |(i, ch)| (Coord::new(row + i * row_step, col + i * col_step), ch))
}
