//! Word-search puzzle generation.
//!
//! This crate builds word-search grids: it places a list of words into a
//! square letter grid along random straight lines, then fills every remaining
//! cell with a random letter.
//!
//! # Overview
//!
//! - [`PuzzleGenerator`]: Randomized, retry-bounded placement of a word list.
//! - [`placement`]: The placement validator ([`can_place`](placement::can_place))
//!   and writer ([`commit_place`](placement::commit_place)).
//! - [`fill_empty_cells`]: Uniform or frequency-weighted letter fill.
//! - [`GeneratorConfig`]: Grid size, directions, crossing policy, attempt
//!   budget, and fill strategy.
//! - [`PuzzleSeed`]: Reproducible randomness.
//! - [`testing`]: A fluent harness for placement tests.
//!
//! # Partial placement
//!
//! Generation never fails once the configuration is valid. Words that cannot
//! be placed are listed in [`GeneratedPuzzle::unplaced`] with an
//! [`UnplacedReason`], so a caller that needs every word can react, for
//! example by retrying with a larger grid.
//!
//! # Examples
//!
//! ```
//! use lexigrid_generator::{GeneratorConfig, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(GeneratorConfig::new(10))?;
//! let puzzle = generator.generate(["sun", "moon", "star"]);
//! assert!(puzzle.grid.is_filled());
//! assert_eq!(puzzle.placements.len() + puzzle.unplaced.len(), 3);
//! println!("{}", puzzle.grid);
//! # Ok::<(), lexigrid_generator::GeneratorError>(())
//! ```

pub use self::{
    config::{
        DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, GeneratorConfig, GeneratorError, MAX_GRID_SIZE,
    },
    fill::{FillStrategy, LETTER_WEIGHTS, fill_empty_cells},
    generator::{GeneratedPuzzle, PuzzleGenerator, UnplacedReason, UnplacedWord},
    placement::CrossingPolicy,
    seed::{PuzzleSeed, SeedParseError},
};

mod config;
mod fill;
mod generator;
pub mod placement;
mod seed;
pub mod testing;
