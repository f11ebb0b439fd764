//! Display functions for command results

use super::formatters::{colored_rows, placement_lines, plural};
use crate::commands::{BenchmarkResult, SolveReport};
use crate::puzzles::PUZZLES;
use colored::Colorize;

/// Print the result of solving a puzzle
///
/// Shows at most `limit` grids when given; the summary always counts every
/// solution.
pub fn print_solve_result(report: &SolveReport, verbose: bool, limit: Option<usize>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Slots: {}   Words: {}",
        report.puzzle.slots.len().to_string().bright_yellow().bold(),
        report.puzzle.words.join(" ").bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    let shown = limit.unwrap_or(usize::MAX);
    for (i, (board, extra)) in report.solutions.iter().take(shown).enumerate() {
        println!(
            "\nSolution {} (extra word: {})",
            i + 1,
            extra.bright_magenta().bold()
        );

        for row in colored_rows(board) {
            println!("  {row}");
        }

        if verbose {
            for line in placement_lines(board) {
                println!("  {}", line.bright_black());
            }
        }
    }

    let hidden = report.solutions.len().saturating_sub(shown);
    if hidden > 0 {
        println!("\n… {} not shown", plural(hidden, "solution"));
    }

    println!();
    if report.solutions.is_empty() {
        println!("{}", "❌ No solution found".red().bold());
    } else {
        println!(
            "{}",
            format!("✅ Found {}", plural(report.solutions.len(), "solution"))
                .green()
                .bold()
        );
    }

    if verbose {
        println!(
            "   Checked {} in {:.3}s ({} search)",
            plural(report.solutions.examined(), "board"),
            report.duration.as_secs_f64(),
            report.mode
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Iterations:       {}", result.iterations);
    println!("   Boards per solve: {}", result.boards_per_solve);
    println!("   Solutions:        {}", result.solutions);

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    for timing in &result.timings {
        println!(
            "   {:<11} avg {}  ({:.0} boards/s)",
            timing.mode.name(),
            format!("{:.3}ms", timing.average.as_secs_f64() * 1000.0)
                .bright_yellow()
                .bold(),
            timing.boards_per_second
        );
    }

    println!();
    if result.modes_agree {
        println!("{}", "✅ All modes returned identical solutions".green());
    } else {
        println!("{}", "❌ Search modes disagree".red().bold());
    }
}

/// Print the names of the embedded puzzles
pub fn print_puzzle_list() {
    println!("{}", "Embedded puzzles:".bright_cyan().bold());
    for (name, text) in PUZZLES {
        let summary = text
            .lines()
            .find_map(|line| line.trim().strip_prefix('#'))
            .map(str::trim)
            .unwrap_or_default();
        println!("  {:<12} {}", name.bright_yellow(), summary);
    }
}
