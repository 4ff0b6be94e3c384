//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lexigrid_core::{DirectionSet, Position};
use lexigrid_generator::{
    CrossingPolicy, DEFAULT_MAX_ATTEMPTS, FillStrategy, GeneratorConfig, PuzzleSeed,
};

use crate::words::Level;

/// Word-search puzzle generator and checker.
#[derive(Debug, Parser)]
#[command(name = "lexigrid", author, version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a puzzle.
    Generate(GenerateArgs),
    /// Check a selection against a saved puzzle.
    Check(CheckArgs),
    /// Reveal one word not yet found.
    Hint(HintArgs),
    /// Show the settings of a level.
    Level(LevelArgs),
}

/// Allowed word directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DirectionsArg {
    /// Right, down, and down-right only.
    Simple,
    /// All eight directions.
    #[default]
    All,
}

/// Arguments of `lexigrid generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Words to hide; the level's built-in list is used when none are given.
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Grid side length [default: depends on --level].
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Allowed word directions.
    #[arg(long, value_enum, value_name = "SET", default_value_t)]
    pub directions: DirectionsArg,

    /// Do not let words share cells.
    #[arg(long)]
    pub no_crossing: bool,

    /// Fill empty cells with uniformly random letters instead of
    /// frequency-weighted ones.
    #[arg(long)]
    pub uniform_fill: bool,

    /// Placement attempts per word.
    #[arg(long, value_name = "K", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Seed as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,

    /// Difficulty level for the built-in word list and default grid size.
    #[arg(long, value_enum, default_value_t)]
    pub level: Level,

    /// Print the puzzle as JSON.
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Builds the generator configuration described by these arguments.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let directions = match self.directions {
            DirectionsArg::Simple => DirectionSet::SIMPLE,
            DirectionsArg::All => DirectionSet::ALL,
        };
        let crossing = if self.no_crossing {
            CrossingPolicy::Forbid
        } else {
            CrossingPolicy::Allow
        };
        let fill = if self.uniform_fill {
            FillStrategy::Uniform
        } else {
            FillStrategy::Weighted
        };
        GeneratorConfig::new(self.size.unwrap_or(self.level.grid_size()))
            .directions(directions)
            .crossing(crossing)
            .max_attempts(self.max_attempts)
            .fill(fill)
    }

    /// Returns the seed to generate from.
    ///
    /// Uses `--seed`, then `--phrase`, then a fresh random seed.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        match (self.seed, &self.phrase) {
            (Some(seed), _) => seed,
            (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
            (None, None) => PuzzleSeed::random(),
        }
    }
}

/// Arguments of `lexigrid check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Puzzle JSON written by `lexigrid generate --json`.
    #[arg(long, value_name = "FILE")]
    pub puzzle: PathBuf,

    /// Selected cells as `row,col`.
    #[arg(
        long,
        value_name = "ROW,COL",
        num_args = 1..,
        required = true,
        value_parser = parse_position,
    )]
    pub select: Vec<Position>,

    /// Words already found, so that selecting them again reports a repeat.
    #[arg(long = "found", value_name = "WORD")]
    pub found: Vec<String>,
}

/// Arguments of `lexigrid hint`.
#[derive(Debug, Args)]
pub struct HintArgs {
    /// Puzzle JSON written by `lexigrid generate --json`.
    #[arg(long, value_name = "FILE")]
    pub puzzle: PathBuf,

    /// Words already found; they are never revealed.
    #[arg(long = "found", value_name = "WORD")]
    pub found: Vec<String>,

    /// Hints taken so far.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub hints_used: u32,
}

/// Arguments of `lexigrid level`.
#[derive(Debug, Args)]
pub struct LevelArgs {
    /// Level to describe.
    #[arg(value_enum, default_value_t)]
    pub level: Level,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate {part:?}: {e}"))
    };
    Ok(Position::new(parse(row)?, parse(col)?))
}
