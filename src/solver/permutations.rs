//! Positional permutation enumeration
//!
//! Permutes indices rather than values, so equal words at different positions
//! still produce distinct orderings.

/// Iterator over every ordering of `0..n` in lexicographic order
///
/// Yields `n!` permutations; for `n == 0` it yields one empty permutation.
///
/// # Examples
/// ```
/// use crossword_solver::solver::Permutations;
///
/// let perms: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(perms[0], [0, 1, 2]);
/// assert_eq!(perms[1], [0, 2, 1]);
/// assert_eq!(perms[5], [2, 1, 0]);
/// assert_eq!(perms.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    indices: Vec<usize>,
    done: bool,
}

impl Permutations {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            done: false,
        }
    }

    /// Rearrange `indices` into the next ordering, returning false after the last
    fn advance(&mut self) -> bool {
        let indices = &mut self.indices;

        // Rightmost position whose successor is larger
        let Some(pivot) = (1..indices.len())
            .rev()
            .find(|&i| indices[i - 1] < indices[i])
            .map(|i| i - 1)
        else {
            return false;
        };

        // Rightmost element larger than the pivot; one exists past the pivot
        let mut swap = indices.len() - 1;
        while indices[swap] <= indices[pivot] {
            swap -= 1;
        }

        indices.swap(pivot, swap);
        indices[pivot + 1..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.indices.clone();
        self.done = !self.advance();
        Some(current)
    }
}

/// Number of orderings of `n` items
#[must_use]
pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yields_single_empty_permutation() {
        let perms: Vec<Vec<usize>> = Permutations::new(0).collect();
        assert_eq!(perms, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn single_element() {
        let perms: Vec<Vec<usize>> = Permutations::new(1).collect();
        assert_eq!(perms, vec![vec![0]]);
    }

    #[test]
    fn three_elements_in_lexicographic_order() {
        let perms: Vec<Vec<usize>> = Permutations::new(3).collect();
        assert_eq!(
            perms,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn count_matches_factorial() {
        for n in 0..=6 {
            assert_eq!(Permutations::new(n).count(), factorial(n), "n = {n}");
        }
    }

    #[test]
    fn permutations_are_distinct_and_sorted() {
        let perms: Vec<Vec<usize>> = Permutations::new(5).collect();
        assert!(perms.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn exhausted_iterator_stays_empty() {
        let mut perms = Permutations::new(2);
        assert!(perms.next().is_some());
        assert!(perms.next().is_some());
        assert!(perms.next().is_none());
        assert!(perms.next().is_none());
    }

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(5), 120);
    }
}
