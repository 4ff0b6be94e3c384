//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Configure a `PuzzleGenerator`
//! - Generate a puzzle from a word list
//! - Display the grid, placements, and seed
//! - Sample many seeds and keep the puzzle that places the most words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- cat dog elephant bird
//! ```
//!
//! Sample up to 500 seeds on a small grid and keep the densest result:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 6 --max-tries 500 giraffe zebra tiger ant owl
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use lexigrid_core::DirectionSet;
use lexigrid_generator::{CrossingPolicy, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Directions {
    Simple,
    All,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to hide in the grid.
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,

    /// Grid side length.
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Allowed word directions.
    #[arg(long, value_name = "SET", default_value = "all")]
    directions: Directions,

    /// Do not let words share cells.
    #[arg(long)]
    no_crossing: bool,

    /// Puzzles to sample; the one placing the most words is printed.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    let directions = match args.directions {
        Directions::Simple => DirectionSet::SIMPLE,
        Directions::All => DirectionSet::ALL,
    };
    let crossing = if args.no_crossing {
        CrossingPolicy::Forbid
    } else {
        CrossingPolicy::Allow
    };
    let config = GeneratorConfig::new(args.size)
        .directions(directions)
        .crossing(crossing);
    let generator = match PuzzleGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| generator.generate(&args.words))
        .max_by_key(|puzzle| puzzle.placements.len());

    if let Some(puzzle) = best {
        print_puzzle(&puzzle, args.max_tries);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, tries: usize) {
    if let Some(seed) = puzzle.seed {
        println!("Seed: {seed}");
    }
    if tries > 1 {
        println!("Best of {tries} tries");
    }
    println!();
    println!("{}", puzzle.grid);
    println!();
    for placement in &puzzle.placements {
        println!(
            "{:<12} {} -> {} ({})",
            placement.word(),
            placement.start(),
            placement.end(),
            placement.direction()
        );
    }
    for unplaced in &puzzle.unplaced {
        println!("{:<12} not placed: {}", unplaced.word, unplaced.reason);
    }
}
