//! Formatting utilities for terminal output

use crate::core::{BLANK, Board};
use colored::Colorize;

/// Grid rows with letters highlighted and blank cells dimmed
#[must_use]
pub fn colored_rows(board: &Board) -> Vec<String> {
    board
        .grid()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&ch| {
                    if ch == BLANK {
                        "·".bright_black().to_string()
                    } else {
                        ch.to_string().bright_white().bold().to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// One line per placement, e.g. `'BEAR' - [1, 1] - down`
#[must_use]
pub fn placement_lines(board: &Board) -> Vec<String> {
    board
        .placements()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Pluralize `noun` for `count`
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, GRID_SIZE, Placement};

    fn board() -> Board {
        Board::new(vec![
            Placement::new("hello", 1, 1, Direction::Down),
            Placement::new("ladies", 3, 1, Direction::Across),
        ])
    }

    #[test]
    fn colored_rows_cover_grid() {
        colored::control::set_override(false);
        let rows = colored_rows(&board());

        assert_eq!(rows.len(), GRID_SIZE);
        assert_eq!(rows[2], "l a d i e s · · · ·");
    }

    #[test]
    fn placement_lines_in_board_order() {
        assert_eq!(
            placement_lines(&board()),
            ["'hello' - [1, 1] - down", "'ladies' - [3, 1] - across"]
        );
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "solution"), "1 solution");
        assert_eq!(plural(0, "solution"), "0 solutions");
        assert_eq!(plural(3, "board"), "3 boards");
    }
}
