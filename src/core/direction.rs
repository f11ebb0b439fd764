//! Word orientation on the grid

use std::fmt;
use std::str::FromStr;

/// Orientation of a word laid into the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Letters advance along the row (column increases)
    Across,
    /// Letters advance down the column (row increases)
    Down,
}

impl Direction {
    /// Row and column step between consecutive letters
    #[inline]
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// Lowercase name as used in puzzle files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Across => "across",
            Self::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Parse `across`/`down` (or `a`/`d`), ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "across" | "a" => Ok(Self::Across),
            "down" | "d" => Ok(Self::Down),
            _ => Err(format!("Invalid direction: {s}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_names() {
        assert_eq!("across".parse::<Direction>(), Ok(Direction::Across));
        assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("a".parse::<Direction>(), Ok(Direction::Across));
        assert_eq!(" d ".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("diagonal".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn step_moves_one_cell() {
        assert_eq!(Direction::Across.step(), (0, 1));
        assert_eq!(Direction::Down.step(), (1, 0));
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Direction::Across.to_string(), "across");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
