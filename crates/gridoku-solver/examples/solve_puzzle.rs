//! Example demonstrating puzzle solving from the command line.
//!
//! This example shows how to:
//! - Parse a puzzle from its text form
//! - Solve it with the default rules
//! - Report the outcome together with the solve statistics
//!
//! Exits with status 1 when the puzzle has no solution or a limit stopped
//! the search, and with status 2 when the puzzle text is malformed.
//!
//! # Usage
//!
//! Solve the built-in puzzle:
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Pass a puzzle as 81 cells in row-major order, with `.`, `_`, or `0` for
//! blanks and whitespace ignored:
//!
//! ```sh
//! cargo run --example solve_puzzle -- "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Cap the number of trial assignments the search may make:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --max-decisions 1000 "3....8..2..1...6.7...2.....8.5.9...1....7.4......1.9.8.9..4..5......6....7......."
//! ```

use std::process;

use clap::Parser;
use gridoku_core::DigitGrid;
use gridoku_solver::{SolveLimits, SolveOutcome, Solver};

const BUILT_IN: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle text: 81 cells, `.`/`_`/`0` for blanks. Defaults to a built-in
    /// puzzle.
    puzzle: Option<String>,

    /// Maximum trial assignments before giving up.
    #[arg(long, value_name = "COUNT")]
    max_decisions: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = args.puzzle.as_deref().unwrap_or(BUILT_IN);
    let puzzle = match text.parse::<DigitGrid>() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    let mut limits = SolveLimits::none();
    if let Some(max) = args.max_decisions {
        limits = limits.with_max_decisions(max);
    }
    let solver = Solver::new().with_limits(limits);

    println!("Puzzle ({} fixed cells):", puzzle.given_count());
    println!("{puzzle}");
    println!();

    let (outcome, stats) = solver.solve_with_stats(&puzzle);
    match &outcome {
        SolveOutcome::Solved(solution) => {
            println!("Solution:");
            println!("{solution}");
        }
        SolveOutcome::Unsatisfiable => println!("No solution exists."),
        SolveOutcome::LimitReached => println!("Gave up: limit reached."),
    }
    println!();

    println!("Stats:");
    for rule in solver.rules() {
        println!("  {}: {}", rule.name(), stats.rule_count(rule.name()));
    }
    println!("  decisions: {}", stats.decisions);
    println!("  backtracks: {}", stats.backtracks);

    if !outcome.is_solved() {
        process::exit(1);
    }
}
