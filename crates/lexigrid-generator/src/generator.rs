use std::cmp::Reverse;

use lexigrid_core::{Direction, LetterGrid, Placement, Position};
use rand::{Rng, RngExt as _, seq::IndexedRandom as _};

use crate::{
    GeneratorConfig, GeneratorError, PuzzleSeed, fill,
    placement::{can_place_with, commit_place},
};

/// A generated word-search puzzle.
///
/// The grid is always completely filled. `placements` holds one entry per
/// word that made it into the grid and `unplaced` lists every requested word
/// that did not, so callers can tell "requested" and "placed" apart without
/// recounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed the puzzle was generated from, if generated from a seed.
    pub seed: Option<PuzzleSeed>,
    /// The filled letter grid.
    pub grid: LetterGrid,
    /// Placed words, in placement order (longest first).
    pub placements: Vec<Placement>,
    /// Words that could not be placed, in processing order.
    pub unplaced: Vec<UnplacedWord>,
}

impl GeneratedPuzzle {
    /// Returns `true` if every requested word was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the placement of `word`, if it was placed.
    ///
    /// The comparison ignores ASCII case.
    #[must_use]
    pub fn placement(&self, word: &str) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|placement| placement.word().eq_ignore_ascii_case(word))
    }

    /// Returns the placed words in placement order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(Placement::word)
    }
}

/// A requested word that is missing from the generated puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnplacedWord {
    /// The word as requested (before normalization).
    pub word: String,
    /// Why it was not placed.
    pub reason: UnplacedReason,
}

/// Why a word was left out of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum UnplacedReason {
    /// The word was empty or contained characters other than letters and spaces.
    #[display("not a word made of letters")]
    InvalidWord,
    /// The same word (ignoring case and spaces) was requested earlier.
    #[display("repeats an earlier word")]
    Duplicate,
    /// The word has more letters than the grid has rows.
    #[display("{len} letters do not fit a grid of size {size}")]
    TooLong {
        /// Letters in the normalized word.
        len: usize,
        /// Grid size.
        size: usize,
    },
    /// No fitting start cell and direction was found within the attempt budget.
    #[display("no free spot after {attempts} attempts")]
    AttemptsExhausted {
        /// Attempts made.
        attempts: usize,
    },
}

/// Builds word-search puzzles by randomized placement.
///
/// Words are processed longest first (ties keep input order). For each word
/// the generator repeatedly picks a random allowed direction and a random
/// start cell that keeps the word inside the grid, and commits the first
/// placement that fits. Words that are too long, or that find no spot within
/// the attempt budget, are reported in [`GeneratedPuzzle::unplaced`]. Finally
/// every remaining empty cell is filled with a random letter.
///
/// # Examples
///
/// ```
/// use lexigrid_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(GeneratorConfig::new(8))?;
/// let seed = PuzzleSeed::from_phrase("animals");
/// let puzzle = generator.generate_with_seed(["cat", "dog", "elephant", "bird"], seed);
///
/// assert!(puzzle.grid.is_filled());
/// for placement in &puzzle.placements {
///     assert_eq!(puzzle.grid.read(placement.positions()).as_deref(), Some(placement.word()));
/// }
///
/// // Same seed, same puzzle.
/// assert_eq!(
///     puzzle,
///     generator.generate_with_seed(["cat", "dog", "elephant", "bird"], seed)
/// );
/// # Ok::<(), lexigrid_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the configuration cannot produce a puzzle.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a freshly drawn random seed.
    pub fn generate<I, S>(&self, words: I) -> GeneratedPuzzle
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    pub fn generate_with_seed<I, S>(&self, words: I, seed: PuzzleSeed) -> GeneratedPuzzle
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rng = seed.to_rng();
        let puzzle = self.generate_with_rng(words, &mut rng);
        GeneratedPuzzle {
            seed: Some(seed),
            ..puzzle
        }
    }

    /// Generates a puzzle drawing all randomness from `rng`.
    ///
    /// The returned puzzle has no seed.
    pub fn generate_with_rng<I, S, R>(&self, words: I, rng: &mut R) -> GeneratedPuzzle
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let size = self.config.size;
        let mut grid = LetterGrid::new(size);
        let mut placements = Vec::new();
        let mut unplaced = Vec::new();

        let mut candidates: Vec<(String, String)> = Vec::new();
        for raw in words {
            let raw = raw.as_ref();
            match normalize_word(raw) {
                Some(word) if candidates.iter().any(|(_, seen)| *seen == word) => {
                    log::debug!("skipping {raw:?}: repeats an earlier word");
                    unplaced.push(UnplacedWord {
                        word: raw.to_owned(),
                        reason: UnplacedReason::Duplicate,
                    });
                }
                Some(word) => candidates.push((raw.to_owned(), word)),
                None => {
                    log::debug!("skipping {raw:?}: not a word made of letters");
                    unplaced.push(UnplacedWord {
                        word: raw.to_owned(),
                        reason: UnplacedReason::InvalidWord,
                    });
                }
            }
        }
        let requested = candidates.len() + unplaced.len();

        // Stable sort keeps input order among words of equal length.
        candidates.sort_by_key(|(_, word)| Reverse(word.len()));

        let directions: Vec<Direction> = self.config.directions.directions().collect();
        for (raw, word) in candidates {
            if word.len() > size {
                log::debug!("skipping {word}: longer than grid size {size}");
                unplaced.push(UnplacedWord {
                    word: raw,
                    reason: UnplacedReason::TooLong {
                        len: word.len(),
                        size,
                    },
                });
                continue;
            }

            match self.place_word(&mut grid, &word, &directions, rng) {
                Some(placement) => {
                    log::debug!(
                        "placed {word} at {} going {}",
                        placement.start(),
                        placement.direction()
                    );
                    placements.push(placement);
                }
                None => {
                    log::debug!(
                        "dropping {word}: no spot after {} attempts",
                        self.config.max_attempts
                    );
                    unplaced.push(UnplacedWord {
                        word: raw,
                        reason: UnplacedReason::AttemptsExhausted {
                            attempts: self.config.max_attempts,
                        },
                    });
                }
            }
        }

        let filled = fill::fill_empty_cells(&mut grid, self.config.fill, rng);
        log::info!(
            "generated {size}x{size} puzzle: {}/{requested} words placed, {filled} cells filled",
            placements.len()
        );

        GeneratedPuzzle {
            seed: None,
            grid,
            placements,
            unplaced,
        }
    }

    fn place_word<R>(
        &self,
        grid: &mut LetterGrid,
        word: &str,
        directions: &[Direction],
        rng: &mut R,
    ) -> Option<Placement>
    where
        R: Rng + ?Sized,
    {
        let size = grid.size();
        let len = word.len();
        for attempt in 1..=self.config.max_attempts {
            let &direction = directions.choose(rng)?;
            let (d_row, d_col) = direction.delta();
            let (Some(rows), Some(cols)) = (
                Direction::start_range(d_row, len, size),
                Direction::start_range(d_col, len, size),
            ) else {
                continue;
            };
            let start = Position::new(rng.random_range(rows), rng.random_range(cols));
            log::trace!("attempt {attempt} for {word}: {start} going {direction}");

            if can_place_with(grid, word, start, direction, self.config.crossing) {
                let positions = commit_place(grid, word, start, direction);
                return Some(Placement::new(word.to_owned(), start, direction, positions));
            }
        }
        None
    }
}

/// Uppercases `raw` and strips whitespace.
///
/// Returns `None` if nothing is left or a non-letter remains.
fn normalize_word(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_ascii_uppercase())
        .collect();
    (!word.is_empty() && word.chars().all(|ch| ch.is_ascii_uppercase())).then_some(word)
}
