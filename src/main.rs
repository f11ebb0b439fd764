//! Crossword Solver - CLI
//!
//! Solves crossword slot puzzles from embedded samples or puzzle files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_solver::{
    commands::{SolveConfig, run_benchmark, solve_puzzle},
    output::{print_benchmark_result, print_puzzle_list, print_solve_result},
    puzzles::loader::resolve,
    solver::SearchMode,
};

#[derive(Parser)]
#[command(
    name = "crossword_solver",
    about = "Fit a word pool into fixed crossword slots, leaving exactly one word unused",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle: embedded name (see `list`) or path to a puzzle file
    #[arg(short, long, global = true, default_value = "simple")]
    puzzle: String,

    /// Search mode: sequential (default) or parallel
    #[arg(short, long, global = true, default_value = "sequential")]
    mode: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the puzzle and print every solution (default)
    Solve {
        /// Show placements and search statistics
        #[arg(short, long)]
        verbose: bool,

        /// Print at most this many solution grids
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Time repeated solves in every search mode
    Benchmark {
        /// Number of solves per mode
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// List the embedded sample puzzles
    List,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Default to Solve if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        verbose: false,
        limit: None,
    });

    match command {
        Commands::Solve { verbose, limit } => {
            run_solve_command(&cli.puzzle, &cli.mode, verbose, limit)
        }
        Commands::Benchmark { count } => run_benchmark_command(&cli.puzzle, count),
        Commands::List => {
            print_puzzle_list();
            Ok(())
        }
    }
}

fn run_solve_command(puzzle: &str, mode: &str, verbose: bool, limit: Option<usize>) -> Result<()> {
    let puzzle = resolve(puzzle).with_context(|| format!("Failed to load puzzle '{puzzle}'"))?;
    log::info!(
        "Loaded puzzle with {} slots and {} words",
        puzzle.slots.len(),
        puzzle.words.len()
    );

    let mut config = SolveConfig::new(puzzle);
    config.mode = SearchMode::from_name(mode);

    let report = solve_puzzle(config)?;
    print_solve_result(&report, verbose, limit);
    Ok(())
}

fn run_benchmark_command(puzzle_name: &str, count: usize) -> Result<()> {
    let puzzle =
        resolve(puzzle_name).with_context(|| format!("Failed to load puzzle '{puzzle_name}'"))?;

    println!("Benchmarking '{puzzle_name}' with {count} solves per mode...");
    let result = run_benchmark(&puzzle, count)?;
    print_benchmark_result(&result);
    Ok(())
}
