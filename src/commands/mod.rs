//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{BenchmarkResult, ModeTiming, run_benchmark};
pub use solve::{SolveConfig, SolveReport, solve_puzzle};
