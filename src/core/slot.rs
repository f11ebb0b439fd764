//! Empty crossword slots awaiting a word

use super::Direction;
use std::fmt;
use std::str::FromStr;

/// A fixed grid position and orientation that receives one word
///
/// Coordinates are 1-based. Slots carry no length: whatever word is assigned
/// to a slot determines how many cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Slot {
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }
}

impl From<(usize, usize, Direction)> for Slot {
    fn from((row, col, direction): (usize, usize, Direction)) -> Self {
        Self::new(row, col, direction)
    }
}

impl FromStr for Slot {
    type Err = String;

    /// Parse `row col direction`, separated by whitespace and/or commas
    ///
    /// # Examples
    /// ```
    /// use crossword_solver::core::{Direction, Slot};
    ///
    /// let slot: Slot = "3, 1, across".parse().unwrap();
    /// assert_eq!(slot, Slot::new(3, 1, Direction::Across));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let [row, col, direction] = parts.as_slice() else {
            return Err(format!(
                "Slot must be 'row col direction', got {} fields",
                parts.len()
            ));
        };

        let row: usize = row.parse().map_err(|_| format!("Invalid row: {row}"))?;
        let col: usize = col.parse().map_err(|_| format!("Invalid column: {col}"))?;
        if row == 0 || col == 0 {
            return Err(format!("Coordinates are 1-based, got ({row}, {col})"));
        }

        Ok(Self::new(row, col, direction.parse()?))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] {}", self.row, self.col, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_separated() {
        let slot: Slot = "1 10 down".parse().unwrap();
        assert_eq!(slot, Slot::new(1, 10, Direction::Down));
    }

    #[test]
    fn parses_comma_separated() {
        let slot: Slot = "5,2,a".parse().unwrap();
        assert_eq!(slot, Slot::new(5, 2, Direction::Across));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!("1 1".parse::<Slot>().is_err());
        assert!("1 1 down extra".parse::<Slot>().is_err());
    }

    #[test]
    fn rejects_zero_and_non_numeric_coordinates() {
        assert!("0 1 down".parse::<Slot>().is_err());
        assert!("1 x down".parse::<Slot>().is_err());
        assert!("-1 1 down".parse::<Slot>().is_err());
    }

    #[test]
    fn rejects_bad_direction() {
        assert!("1 1 sideways".parse::<Slot>().is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(Slot::new(2, 3, Direction::Down).to_string(), "[2, 3] down");
    }
}
