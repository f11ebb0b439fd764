//! Search execution modes
//!
//! Both modes enumerate exactly the same boards and report solutions in the
//! same order; they differ only in how the work is scheduled.

use std::fmt;

/// How the solver walks the search space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// One thread, extra words in pool order (default)
    #[default]
    Sequential,
    /// Extra-word choices searched concurrently on the rayon pool
    Parallel,
}

impl SearchMode {
    /// Create a mode from its name
    ///
    /// Supported names: "sequential", "parallel", "par"
    /// Defaults to sequential if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "parallel" | "par" => Self::Parallel,
            _ => Self::Sequential,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_known_modes() {
        assert_eq!(SearchMode::from_name("parallel"), SearchMode::Parallel);
        assert_eq!(SearchMode::from_name("par"), SearchMode::Parallel);
        assert_eq!(SearchMode::from_name("sequential"), SearchMode::Sequential);
    }

    #[test]
    fn from_name_falls_back_to_sequential() {
        assert_eq!(SearchMode::from_name("quantum"), SearchMode::Sequential);
        assert_eq!(SearchMode::default(), SearchMode::Sequential);
    }
}
