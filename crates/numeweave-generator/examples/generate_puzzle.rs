//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`
//! - Generate a puzzle with a requested blank count
//! - Reproduce a puzzle from its seed
//! - Generate a batch of puzzles in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Control the requested blank count (default: 45):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --blanks 33
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Generate several puzzles across all cores:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 16
//! ```

use std::process;

use clap::Parser;
use numeweave_generator::{GeneratedPuzzle, PuzzleGenerator};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Requested number of blank cells (0-64; saturates when unreachable).
    #[arg(long, value_name = "COUNT", default_value_t = 45)]
    blanks: u8,

    /// Seed to reproduce a specific puzzle. Implies --count 1.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "N", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.blanks > 64 {
        eprintln!("--blanks must be at most 64: no unique puzzle has fewer than 17 givens.");
        process::exit(2);
    }
    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(2);
    }

    let generator = PuzzleGenerator::new();

    if let Some(seed) = args.seed {
        print_puzzle(&generator.generate_with_seed(seed, args.blanks));
        return;
    }

    let puzzles: Vec<_> = (0..args.count)
        .into_par_iter()
        .map(|_| generator.generate(args.blanks))
        .collect();
    for puzzle in &puzzles {
        print_puzzle(puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} blanks):", puzzle.blank_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
}
