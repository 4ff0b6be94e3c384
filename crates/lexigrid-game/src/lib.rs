//! Word-search play sessions.
//!
//! A player claims a word by selecting the cells it occupies. This crate
//! checks selections against a [`GeneratedPuzzle`](lexigrid_generator::GeneratedPuzzle)
//! and tracks found words, score, and hints.
//!
//! # Overview
//!
//! - [`selection`]: Line classification and exact placement matching.
//! - [`Game`]: A play session with scoring and hints.

pub use self::game::{Game, GameError, GameStatus, POINTS_PER_LETTER, SelectionOutcome};

mod game;
pub mod selection;
