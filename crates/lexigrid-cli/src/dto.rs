//! JSON DTOs for generated puzzles and selection checks.
//!
//! [`PuzzleDto`] is the serialized form of a [`GeneratedPuzzle`]: the grid is
//! a flat row-major list of single-letter strings and each placement is keyed
//! by its word. [`SelectionResponseDto`] reports the result of checking one
//! selection, [`HintResponseDto`] a revealed word and [`LevelDto`] the
//! settings of a level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lexigrid_core::{Direction, Letter, LetterGrid, LineKind, Placement, Position};
use lexigrid_game::SelectionOutcome;
use lexigrid_generator::{GeneratedPuzzle, MAX_GRID_SIZE, PuzzleSeed, SeedParseError};

use crate::words::Level;

/// Serialized form of a generated puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDto {
    /// Seed as 64 hex characters; absent for puzzles built from a bare RNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Grid side length.
    pub size: usize,
    /// Row-major letters, one string per cell.
    pub grid: Vec<String>,
    /// Placed words keyed by word.
    pub placements: BTreeMap<String, PlacementDto>,
    /// Requested words that were not placed.
    #[serde(default)]
    pub unplaced: Vec<String>,
    /// A short clue for each placed word.
    #[serde(default)]
    pub hints: BTreeMap<String, String>,
}

/// Serialized form of one placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDto {
    /// Direction name, such as `"diagonal-up-right"`.
    pub direction: String,
    /// Occupied cells as `[row, col]`, in word order.
    pub positions: Vec<[usize; 2]>,
}

/// A revealed word, as returned by a hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResponseDto {
    /// The revealed word.
    pub word: String,
    /// Its cells as `[row, col]`, in word order.
    pub positions: Vec<[usize; 2]>,
    /// Its direction name.
    pub direction: String,
    /// Hints used so far, including this one.
    pub hints_used: u32,
}

impl HintResponseDto {
    /// Builds a response for a revealed placement.
    #[must_use]
    pub fn from_placement(placement: &Placement, hints_used: u32) -> Self {
        let PlacementDto {
            direction,
            positions,
        } = PlacementDto::from_placement(placement);
        Self {
            word: placement.word().to_owned(),
            positions,
            direction,
            hints_used,
        }
    }
}

/// Settings of a built-in level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDto {
    /// 1-based level number.
    pub level_number: u32,
    /// Difficulty name.
    pub difficulty: String,
    /// Grid side length.
    pub grid_size: usize,
    /// Words hidden per puzzle.
    pub word_count: usize,
    /// Time limit in seconds.
    pub time_limit: u64,
    /// Points listed per word.
    pub points_per_word: u32,
    /// Total score needed to unlock the level.
    pub unlock_score: u32,
    /// Number of the following level, if any.
    pub next_level: Option<u32>,
}

impl LevelDto {
    /// Builds a DTO from a [`Level`].
    #[must_use]
    pub fn from_level(level: Level) -> Self {
        Self {
            level_number: level.number(),
            difficulty: level.name().to_owned(),
            grid_size: level.grid_size(),
            word_count: level.word_count(),
            time_limit: level.time_limit().as_secs(),
            points_per_word: level.points_per_word(),
            unlock_score: level.unlock_score(),
            next_level: level.next().map(Level::number),
        }
    }
}

/// Returns the clue shown for a hidden word.
///
/// ```
/// assert_eq!(lexigrid_cli::dto::word_hint("OCEAN"), "A word with 5 letters");
/// ```
#[must_use]
pub fn word_hint(word: &str) -> String {
    format!("A word with {} letters", word.chars().count())
}

/// Result of checking a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResponseDto {
    /// Whether the selection covers a placed word exactly.
    pub matched: bool,
    /// The matched word, or empty.
    pub word: String,
    /// The line shape of a matched selection, or empty.
    pub direction: String,
}

impl PuzzleDto {
    /// Builds a DTO from a [`GeneratedPuzzle`].
    #[must_use]
    pub fn from_puzzle(puzzle: &GeneratedPuzzle) -> Self {
        let grid = puzzle
            .grid
            .cells()
            .iter()
            .map(|cell| cell.map(|letter| letter.to_string()).unwrap_or_default())
            .collect();
        let placements = puzzle
            .placements
            .iter()
            .map(|placement| {
                (
                    placement.word().to_owned(),
                    PlacementDto::from_placement(placement),
                )
            })
            .collect();
        let hints = puzzle
            .words()
            .map(|word| (word.to_owned(), word_hint(word)))
            .collect();
        Self {
            seed: puzzle.seed.map(String::from),
            size: puzzle.grid.size(),
            grid,
            placements,
            unplaced: puzzle.unplaced.iter().map(|u| u.word.clone()).collect(),
            hints,
        }
    }

    /// Converts this DTO into a playable [`GeneratedPuzzle`].
    ///
    /// Unplaced words are not part of play and come back empty.
    ///
    /// # Errors
    ///
    /// Returns a [`DtoError`] if the seed, grid, or any placement is
    /// malformed, or if a placement does not spell its word in the grid.
    pub fn to_puzzle(&self) -> Result<GeneratedPuzzle, DtoError> {
        let size = self.size;
        if !(1..=MAX_GRID_SIZE).contains(&size) {
            return Err(DtoError::InvalidSize { size });
        }
        let expected = size * size;
        if self.grid.len() != expected {
            return Err(DtoError::GridLength {
                len: self.grid.len(),
                expected,
            });
        }

        let seed = self.seed.as_deref().map(str::parse::<PuzzleSeed>).transpose()?;

        let mut grid = LetterGrid::new(size);
        for (index, cell) in self.grid.iter().enumerate() {
            let letter = single_letter(cell).ok_or_else(|| DtoError::InvalidCell {
                index,
                value: cell.clone(),
            })?;
            grid.set(Position::from_index(index, size), letter);
        }

        let placements = self
            .placements
            .iter()
            .map(|(word, dto)| dto.to_placement(word, &grid))
            .collect::<Result<_, _>>()?;

        Ok(GeneratedPuzzle {
            seed,
            grid,
            placements,
            unplaced: Vec::new(),
        })
    }
}

impl PlacementDto {
    /// Builds a DTO from a [`Placement`].
    #[must_use]
    pub fn from_placement(placement: &Placement) -> Self {
        Self {
            direction: placement.direction().name().to_owned(),
            positions: placement
                .positions()
                .iter()
                .map(|pos| [pos.row(), pos.col()])
                .collect(),
        }
    }

    fn to_placement(&self, word: &str, grid: &LetterGrid) -> Result<Placement, DtoError> {
        let direction =
            Direction::from_name(&self.direction).ok_or_else(|| DtoError::UnknownDirection {
                name: self.direction.clone(),
            })?;
        let mismatch = || DtoError::PlacementMismatch {
            word: word.to_owned(),
        };

        let positions: Vec<Position> = self
            .positions
            .iter()
            .map(|&[row, col]| Position::new(row, col))
            .collect();
        let &start = positions.first().ok_or_else(mismatch)?;
        if positions.len() != word.chars().count() {
            return Err(mismatch());
        }
        for (i, (pos, ch)) in positions.iter().zip(word.chars()).enumerate() {
            let on_line = direction.step(start, i, grid.size()) == Some(*pos);
            let spelled = grid.get(*pos).map(Letter::as_char) == Some(ch);
            if !on_line || !spelled {
                return Err(mismatch());
            }
        }

        Ok(Placement::new(word.to_owned(), start, direction, positions))
    }
}

impl SelectionResponseDto {
    /// Builds a response from a selection outcome.
    ///
    /// A word that was already found still counts as matched.
    #[must_use]
    pub fn from_outcome(outcome: &SelectionOutcome, line: Option<LineKind>) -> Self {
        let word = match outcome {
            SelectionOutcome::Found { word, .. } | SelectionOutcome::AlreadyFound { word } => Some(word),
            SelectionOutcome::NoMatch { .. } => None,
        };
        match (word, line) {
            (Some(word), Some(line)) => Self {
                matched: true,
                word: word.clone(),
                direction: line.name().to_owned(),
            },
            _ => Self::no_match(),
        }
    }

    /// A response for a selection that matched nothing.
    #[must_use]
    pub fn no_match() -> Self {
        Self {
            matched: false,
            word: String::new(),
            direction: String::new(),
        }
    }
}

fn single_letter(cell: &str) -> Option<Letter> {
    let mut chars = cell.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Letter::from_char(ch)
}

/// Errors that can occur when converting a [`PuzzleDto`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DtoError {
    /// The grid size is zero or above [`MAX_GRID_SIZE`].
    #[display("invalid grid size {size}: must be between 1 and {}", MAX_GRID_SIZE)]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// The flat grid does not have `size * size` cells.
    #[display("grid has {len} cells, expected {expected}")]
    GridLength {
        /// Cells present.
        len: usize,
        /// Cells required.
        expected: usize,
    },
    /// A grid cell is not a single letter.
    #[display("grid cell {index} is not a single letter: {value:?}")]
    InvalidCell {
        /// Row-major cell index.
        index: usize,
        /// The offending value.
        value: String,
    },
    /// A placement names an unknown direction.
    #[display("unknown direction: {name}")]
    UnknownDirection {
        /// The unknown name.
        name: String,
    },
    /// A placement's positions do not spell its word along its direction.
    #[display("placement of {word} does not match the grid")]
    PlacementMismatch {
        /// The placed word.
        word: String,
    },
    /// The seed is not valid hex.
    #[display("invalid seed: {_0}")]
    Seed(SeedParseError),
}

impl From<SeedParseError> for DtoError {
    fn from(err: SeedParseError) -> Self {
        Self::Seed(err)
    }
}
