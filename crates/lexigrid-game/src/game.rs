use lexigrid_core::{LetterGrid, LineKind, Placement, Position};
use lexigrid_generator::GeneratedPuzzle;
use rand::{Rng, seq::IndexedRandom as _};

use crate::selection::classify_and_match;

/// Points awarded per letter of a newly found word.
pub const POINTS_PER_LETTER: u32 = 10;

/// Progress of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// No word has been found and no hint has been used.
    NotStarted,
    /// Play has begun and at least one word remains.
    InProgress,
    /// Every placed word has been found.
    Completed,
}

/// What happened when a selection was submitted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The selection claimed a word for the first time.
    Found {
        /// The found word.
        word: String,
        /// The line shape of the selection.
        line: LineKind,
        /// Points added to the score.
        points: u32,
    },
    /// The selection matched a word that was already found.
    AlreadyFound {
        /// The previously found word.
        word: String,
    },
    /// The selection did not match any word.
    NoMatch {
        /// The line shape, if the selection formed a valid line.
        line: Option<LineKind>,
    },
}

/// Errors from game operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A selected position lies outside the grid.
    #[display("position {pos} is outside the {size}x{size} grid")]
    PositionOutOfBounds {
        /// The offending position.
        pos: Position,
        /// Grid size.
        size: usize,
    },
    /// A hint was requested after every word was found.
    #[display("all words have already been found")]
    AllWordsFound,
    /// A restored found word is not part of the puzzle.
    #[display("{word} is not a word in this puzzle")]
    UnknownWord {
        /// The unknown word.
        word: String,
    },
}

/// A word-search play session.
///
/// Tracks which placed words the player has found, the score, and how many
/// hints were used. The session is complete once every placed word is found;
/// words the generator could not place are not part of the game.
///
/// # Example
///
/// ```
/// use lexigrid_core::Position;
/// use lexigrid_game::{Game, SelectionOutcome};
/// use lexigrid_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(GeneratorConfig::new(6))?;
/// let puzzle = generator.generate_with_seed(["cat", "dog"], PuzzleSeed::from_phrase("pets"));
/// let mut game = Game::new(puzzle.clone());
/// assert!(game.status().is_not_started());
///
/// for placement in &puzzle.placements {
///     let outcome = game.submit_selection(placement.positions()).unwrap();
///     assert!(outcome.is_found());
/// }
/// assert!(game.is_completed());
/// assert_eq!(game.score(), 30 * puzzle.placements.len() as u32);
/// # Ok::<(), lexigrid_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: GeneratedPuzzle,
    found: Vec<bool>,
    score: u32,
    hints_used: u32,
}

impl Game {
    /// Starts a session for a generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let found = vec![false; puzzle.placements.len()];
        Self {
            puzzle,
            found,
            score: 0,
            hints_used: 0,
        }
    }

    /// Restores a session from previously found words and the hint count.
    ///
    /// The score is recomputed from the found words.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownWord`] if a found word is not placed in
    /// the puzzle.
    pub fn with_progress<I, S>(
        puzzle: GeneratedPuzzle,
        found_words: I,
        hints_used: u32,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut game = Self::new(puzzle);
        for word in found_words {
            let word = word.as_ref();
            let index = game
                .puzzle
                .placements
                .iter()
                .position(|placement| placement.word().eq_ignore_ascii_case(word))
                .ok_or_else(|| GameError::UnknownWord {
                    word: word.to_owned(),
                })?;
            game.mark_found(index);
        }
        game.hints_used = hints_used;
        Ok(game)
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.puzzle.grid
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns how many hints were used.
    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns the number of words to find.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.found.len()
    }

    /// Returns the found words in placement order.
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.placements_where(true).map(Placement::word)
    }

    /// Returns the placements not yet found.
    pub fn remaining(&self) -> impl Iterator<Item = &Placement> {
        self.placements_where(false)
    }

    /// Returns `true` once every placed word has been found.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.found.iter().all(|&found| found)
    }

    /// Returns the session's progress.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_completed() {
            GameStatus::Completed
        } else if self.hints_used > 0 || self.found.iter().any(|&found| found) {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }

    /// Checks a player's selection and records a newly found word.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PositionOutOfBounds`] if any position is outside
    /// the grid. Selections that do not form a line or do not match a word
    /// are not errors; they yield [`SelectionOutcome::NoMatch`].
    pub fn submit_selection(&mut self, selected: &[Position]) -> Result<SelectionOutcome, GameError> {
        let size = self.puzzle.grid.size();
        if let Some(&pos) = selected.iter().find(|pos| !pos.is_within(size)) {
            return Err(GameError::PositionOutOfBounds { pos, size });
        }

        let result = classify_and_match(selected, &self.puzzle.placements);
        let (Some(line), Some((index, placement))) = (result.line, result.matched) else {
            log::debug!("selection {selected:?} matched nothing");
            return Ok(SelectionOutcome::NoMatch { line: result.line });
        };

        let word = placement.word().to_owned();
        if self.found[index] {
            return Ok(SelectionOutcome::AlreadyFound { word });
        }

        let points = self.mark_found(index);
        log::debug!("found {word} for {points} points");
        if self.is_completed() {
            log::info!("puzzle completed with score {}", self.score);
        }
        Ok(SelectionOutcome::Found { word, line, points })
    }

    /// Reveals a random word that has not been found yet.
    ///
    /// Each call counts as one hint used.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AllWordsFound`] if nothing is left to find.
    pub fn hint<R>(&mut self, rng: &mut R) -> Result<&Placement, GameError>
    where
        R: Rng + ?Sized,
    {
        let remaining: Vec<usize> = (0..self.found.len()).filter(|&i| !self.found[i]).collect();
        let &index = remaining.choose(rng).ok_or(GameError::AllWordsFound)?;
        self.hints_used = self.hints_used.saturating_add(1);
        Ok(&self.puzzle.placements[index])
    }

    fn mark_found(&mut self, index: usize) -> u32 {
        if self.found[index] {
            return 0;
        }
        self.found[index] = true;
        let letters = u32::try_from(self.puzzle.placements[index].len()).unwrap_or(u32::MAX);
        let points = letters.saturating_mul(POINTS_PER_LETTER);
        self.score = self.score.saturating_add(points);
        points
    }

    fn placements_where(&self, found: bool) -> impl Iterator<Item = &Placement> {
        self.puzzle
            .placements
            .iter()
            .zip(&self.found)
            .filter(move |&(_, &is_found)| is_found == found)
            .map(|(placement, _)| placement)
    }
}

#[cfg(test)]
mod tests {
    use lexigrid_core::Direction;
    use lexigrid_generator::{
        GeneratorConfig, PuzzleGenerator, PuzzleSeed,
        placement::{can_place, commit_place},
    };

    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// Builds a 5x5 puzzle with CAT across the top and DOG up the anti-diagonal.
    fn fixed_puzzle() -> GeneratedPuzzle {
        let mut grid = LetterGrid::new(5);
        let mut placements = Vec::new();
        for (word, start, direction) in [
            ("CAT", p(0, 0), Direction::Horizontal),
            ("DOG", p(4, 0), Direction::DiagonalUpRight),
        ] {
            assert!(can_place(&grid, word, start, direction));
            let positions = commit_place(&mut grid, word, start, direction);
            placements.push(Placement::new(word.to_owned(), start, direction, positions));
        }
        GeneratedPuzzle {
            seed: None,
            grid,
            placements,
            unplaced: Vec::new(),
        }
    }

    #[test]
    fn test_find_words_until_completed() {
        let mut game = Game::new(fixed_puzzle());
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.total_words(), 2);

        let outcome = game.submit_selection(&[p(0, 2), p(0, 1), p(0, 0)]).unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::Found {
                word: "CAT".to_owned(),
                line: LineKind::Horizontal,
                points: 30,
            }
        );
        assert_eq!(game.status(), GameStatus::InProgress);

        let outcome = game.submit_selection(&[p(0, 0), p(0, 1), p(0, 2)]).unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::AlreadyFound {
                word: "CAT".to_owned()
            }
        );
        assert_eq!(game.score(), 30);

        game.submit_selection(&[p(4, 0), p(3, 1), p(2, 2)]).unwrap();
        assert!(game.is_completed());
        assert_eq!(game.status(), GameStatus::Completed);
        assert_eq!(game.score(), 60);
        assert_eq!(game.found_words().collect::<Vec<_>>(), ["CAT", "DOG"]);
        assert_eq!(game.remaining().count(), 0);
    }

    #[test]
    fn test_no_match_outcomes() {
        let mut game = Game::new(fixed_puzzle());
        assert_eq!(
            game.submit_selection(&[p(0, 0), p(1, 1), p(2, 3)]).unwrap(),
            SelectionOutcome::NoMatch { line: None }
        );
        assert_eq!(
            game.submit_selection(&[p(1, 0), p(1, 1), p(1, 2)]).unwrap(),
            SelectionOutcome::NoMatch {
                line: Some(LineKind::Horizontal)
            }
        );
        assert_eq!(
            game.submit_selection(&[p(0, 0)]).unwrap(),
            SelectionOutcome::NoMatch { line: None }
        );
        assert_eq!(game.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_out_of_bounds_selection_is_error() {
        let mut game = Game::new(fixed_puzzle());
        assert_eq!(
            game.submit_selection(&[p(0, 4), p(0, 5)]),
            Err(GameError::PositionOutOfBounds {
                pos: p(0, 5),
                size: 5
            })
        );
    }

    #[test]
    fn test_hints() {
        let mut game = Game::new(fixed_puzzle());
        let mut rng = PuzzleSeed::from_phrase("hint").to_rng();

        game.submit_selection(&[p(0, 0), p(0, 1), p(0, 2)]).unwrap();
        let hint = game.hint(&mut rng).unwrap();
        assert_eq!(hint.word(), "DOG");
        assert_eq!(game.hints_used(), 1);

        game.submit_selection(&[p(4, 0), p(3, 1), p(2, 2)]).unwrap();
        assert_eq!(game.hint(&mut rng), Err(GameError::AllWordsFound));
        assert_eq!(game.hints_used(), 1);
    }

    #[test]
    fn test_hint_alone_starts_game() {
        let mut game = Game::new(fixed_puzzle());
        let mut rng = PuzzleSeed::from_phrase("start").to_rng();
        let word = game.hint(&mut rng).unwrap().word().to_owned();
        assert!(["CAT", "DOG"].contains(&word.as_str()));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_restore_progress() {
        let game = Game::with_progress(fixed_puzzle(), ["dog"], 2).unwrap();
        assert_eq!(game.score(), 30);
        assert_eq!(game.hints_used(), 2);
        assert_eq!(game.remaining().map(Placement::word).collect::<Vec<_>>(), ["CAT"]);

        assert_eq!(
            Game::with_progress(fixed_puzzle(), ["cow"], 0),
            Err(GameError::UnknownWord {
                word: "cow".to_owned()
            })
        );
    }

    #[test]
    fn test_generated_puzzle_can_be_completed() {
        let generator = PuzzleGenerator::new(GeneratorConfig::new(10)).unwrap();
        let puzzle = generator.generate_with_seed(
            ["dragon", "castle", "rocket", "planet", "jungle", "forest", "rainbow"],
            PuzzleSeed::from_phrase("complete"),
        );
        let placements = puzzle.placements.clone();
        let mut game = Game::new(puzzle);

        for placement in placements.iter().rev() {
            let mut selected = placement.positions().to_vec();
            selected.reverse();
            let outcome = game.submit_selection(&selected).unwrap();
            assert!(outcome.is_found(), "{} not found: {outcome:?}", placement.word());
        }
        assert!(game.is_completed());
        let expected: usize = placements.iter().map(|p| p.len() * 10).sum();
        assert_eq!(game.score() as usize, expected);
    }
}
