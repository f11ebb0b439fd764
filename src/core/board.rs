//! A complete set of placements rendered onto the fixed grid

use super::Placement;
use std::fmt;

/// Side length of the square grid
pub const GRID_SIZE: usize = 10;

/// Character shown in cells no placement covers
pub const BLANK: char = '*';

/// Rendered grid, indexed `[row - 1][col - 1]`
pub type Grid = [[char; GRID_SIZE]; GRID_SIZE];

/// An ordered set of placements plus the grid they render to
///
/// The grid is written in placement order, so a later placement wins any cell
/// it shares with an earlier one. Cells outside the grid are not rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    placements: Vec<Placement>,
    grid: Grid,
}

impl Board {
    /// Build a board and render its grid
    ///
    /// # Examples
    /// ```
    /// use crossword_solver::core::{Board, Direction, Placement};
    ///
    /// let board = Board::new(vec![
    ///     Placement::new("hello", 1, 1, Direction::Down),
    ///     Placement::new("ladies", 3, 1, Direction::Across),
    /// ]);
    /// assert!(board.is_valid());
    /// assert_eq!(board.grid()[2][..6], ['l', 'a', 'd', 'i', 'e', 's']);
    /// ```
    #[must_use]
    pub fn new(placements: Vec<Placement>) -> Self {
        let grid = placements
            .iter()
            .flat_map(Placement::cells)
            .fold([[BLANK; GRID_SIZE]; GRID_SIZE], |mut grid, (coord, ch)| {
                if let Some(cell) = coord
                    .row
                    .checked_sub(1)
                    .zip(coord.col.checked_sub(1))
                    .and_then(|(r, c)| grid.get_mut(r)?.get_mut(c))
                {
                    *cell = ch;
                }
                grid
            });

        Self { placements, grid }
    }

    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Check that every placement crosses at least one other placement
    ///
    /// Each placement is compared against every other one; a crossing counts
    /// only when both agree on the shared letter. Boards with fewer than two
    /// placements are never valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.placements.len() > 1
            && self.placements.iter().enumerate().all(|(i, placement)| {
                self.placements
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .any(|(_, other)| placement.intersection(other).is_compatible())
            })
    }

    /// Grid rows as space-separated strings
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::testing::grid_from;

    #[test]
    fn renders_grid_from_placements() {
        let board = Board::new(vec![
            Placement::new("hello", 1, 1, Direction::Down),
            Placement::new("ladies", 3, 1, Direction::Across),
        ]);

        assert_eq!(
            board.grid(),
            &grid_from(&["h", "e", "ladies", "l", "o"])
        );
    }

    #[test]
    fn empty_board_is_all_blank() {
        let board = Board::new(Vec::new());
        assert!(board.grid().iter().flatten().all(|&c| c == BLANK));
    }

    #[test]
    fn later_placement_wins_shared_cell() {
        let board = Board::new(vec![
            Placement::new("hello", 1, 1, Direction::Down),
            Placement::new("ladies", 2, 1, Direction::Across),
        ]);
        assert_eq!(board.grid()[1][0], 'l');

        let reversed = Board::new(vec![
            Placement::new("ladies", 2, 1, Direction::Across),
            Placement::new("hello", 1, 1, Direction::Down),
        ]);
        assert_eq!(reversed.grid()[1][0], 'e');
    }

    #[test]
    fn cells_outside_grid_are_skipped() {
        let board = Board::new(vec![Placement::new("gentlemen", 5, 5, Direction::Down)]);
        let column: String = board.grid().iter().map(|row| row[4]).collect();
        assert_eq!(column, "****gentle");
    }

    #[test]
    fn valid_when_all_placements_intersect() {
        let board = Board::new(vec![
            Placement::new("hello", 1, 1, Direction::Down),
            Placement::new("ladies", 3, 1, Direction::Across),
            Placement::new("gentlemen", 2, 5, Direction::Down),
        ]);
        assert!(board.is_valid());
    }

    #[test]
    fn invalid_when_a_placement_is_isolated() {
        let board = Board::new(vec![
            Placement::new("hello", 1, 1, Direction::Down),
            Placement::new("ladies", 3, 1, Direction::Across),
            Placement::new("gentlemen", 1, 10, Direction::Down),
        ]);
        assert!(!board.is_valid());
    }

    #[test]
    fn invalid_when_intersection_letters_differ() {
        let board = Board::new(vec![
            Placement::new("hello", 1, 1, Direction::Down),
            Placement::new("ladies", 2, 1, Direction::Across),
        ]);
        assert!(!board.is_valid());
    }

    #[test]
    fn valid_for_complex_intersections() {
        let board = Board::new(vec![
            Placement::new("BEAR", 1, 1, Direction::Down),
            Placement::new("AGAIN", 3, 1, Direction::Across),
            Placement::new("TAIL", 2, 3, Direction::Down),
            Placement::new("SLOW", 5, 2, Direction::Across),
        ]);
        assert!(board.is_valid());
    }

    #[test]
    fn zero_or_one_placement_is_never_valid() {
        assert!(!Board::new(Vec::new()).is_valid());
        assert!(!Board::new(vec![Placement::new("hello", 1, 1, Direction::Down)]).is_valid());
    }

    #[test]
    fn identical_placements_intersect_each_other() {
        let board = Board::new(vec![
            Placement::new("hello", 1, 1, Direction::Down),
            Placement::new("hello", 1, 1, Direction::Down),
        ]);
        assert!(board.is_valid());
    }

    #[test]
    fn display_joins_rows() {
        let board = Board::new(vec![
            Placement::new("hello", 1, 1, Direction::Down),
            Placement::new("ladies", 3, 1, Direction::Across),
        ]);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), GRID_SIZE);
        assert_eq!(lines[0], "h * * * * * * * * *");
        assert_eq!(lines[2], "l a d i e s * * * *");
    }
}
