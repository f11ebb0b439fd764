//! Benchmark command
//!
//! Times repeated searches of one puzzle in both search modes.

use crate::puzzles::Puzzle;
use crate::solver::{SearchMode, Solver, SolverError, Solutions};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Timing for one search mode
#[derive(Debug, Clone, Copy)]
pub struct ModeTiming {
    pub mode: SearchMode,
    pub total: Duration,
    pub average: Duration,
    pub boards_per_second: f64,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub iterations: usize,
    pub boards_per_solve: usize,
    pub solutions: usize,
    pub timings: Vec<ModeTiming>,
    pub modes_agree: bool,
}

/// Solve `puzzle` `iterations` times in each search mode
///
/// # Errors
///
/// Returns an error if the puzzle's word pool does not fit its slots.
pub fn run_benchmark(puzzle: &Puzzle, iterations: usize) -> Result<BenchmarkResult, SolverError> {
    let solver = puzzle.solver()?;
    let iterations = iterations.max(1);

    let (sequential, sequential_result) = time_mode(&solver, SearchMode::Sequential, iterations);
    let (parallel, parallel_result) = time_mode(&solver, SearchMode::Parallel, iterations);

    Ok(BenchmarkResult {
        iterations,
        boards_per_solve: sequential_result.examined(),
        solutions: sequential_result.len(),
        timings: vec![sequential, parallel],
        modes_agree: sequential_result == parallel_result,
    })
}

fn time_mode(solver: &Solver, mode: SearchMode, iterations: usize) -> (ModeTiming, Solutions) {
    let pb = ProgressBar::new(iterations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(mode.name());

    let start = Instant::now();
    let mut last = Solutions::default();
    for _ in 0..iterations {
        last = solver.solve_with(mode);
        pb.inc(1);
    }
    let total = start.elapsed();

    pb.finish_with_message(format!("{mode} complete"));

    let boards = (last.examined() * iterations) as f64;
    let timing = ModeTiming {
        mode,
        total,
        average: total / iterations as u32,
        boards_per_second: boards / total.as_secs_f64().max(f64::EPSILON),
    };
    (timing, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::loader::by_name;

    #[test]
    fn benchmark_reports_both_modes() {
        let puzzle = by_name("multiple").unwrap();
        let result = run_benchmark(&puzzle, 2).unwrap();

        assert_eq!(result.iterations, 2);
        assert_eq!(result.boards_per_solve, 120);
        assert_eq!(result.solutions, 2);
        assert!(result.modes_agree);

        let modes: Vec<SearchMode> = result.timings.iter().map(|t| t.mode).collect();
        assert_eq!(modes, [SearchMode::Sequential, SearchMode::Parallel]);
    }

    #[test]
    fn benchmark_runs_at_least_once() {
        let puzzle = by_name("simple").unwrap();
        let result = run_benchmark(&puzzle, 0).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.solutions, 1);
    }

    #[test]
    fn benchmark_rejects_invalid_puzzle() {
        let mut puzzle = by_name("simple").unwrap();
        puzzle.words.push("extra".to_string());
        assert!(run_benchmark(&puzzle, 1).is_err());
    }
}
