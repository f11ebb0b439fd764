//! Test helpers for building expected grids

use crate::core::{BLANK, GRID_SIZE, Grid};

/// Build a grid from row strings, padding short rows and missing rows with blanks
///
/// Blank cells inside a row are written as `*`.
pub(crate) fn grid_from(rows: &[&str]) -> Grid {
    let mut grid = [[BLANK; GRID_SIZE]; GRID_SIZE];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            grid[r][c] = ch;
        }
    }
    grid
}
