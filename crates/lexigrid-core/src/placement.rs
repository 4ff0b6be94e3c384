//! Committed word locations.

use std::collections::BTreeSet;

use crate::{Direction, Position};

/// A word's committed location within a grid.
///
/// A placement records the word, where it starts, which way it runs, and the
/// positions its letters occupy in word order. Placements are created by the
/// generator and never change afterwards.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Direction, Placement, Position};
///
/// let placement = Placement::new(
///     "CAT".to_owned(),
///     Position::new(0, 0),
///     Direction::Horizontal,
///     vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
/// );
/// assert_eq!(placement.word(), "CAT");
/// assert_eq!(placement.len(), 3);
/// assert_eq!(placement.end(), Position::new(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: String,
    start: Position,
    direction: Direction,
    positions: Vec<Position>,
}

impl Placement {
    /// Creates a placement record.
    ///
    /// # Panics
    ///
    /// Panics if `positions` does not hold one position per letter of `word`
    /// or does not begin at `start`.
    #[must_use]
    pub fn new(word: String, start: Position, direction: Direction, positions: Vec<Position>) -> Self {
        assert_eq!(
            word.chars().count(),
            positions.len(),
            "placement must have one position per letter"
        );
        assert_eq!(positions.first(), Some(&start), "placement must begin at start");
        Self {
            word,
            start,
            direction,
            positions,
        }
    }

    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the position of the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the position of the last letter.
    #[must_use]
    pub fn end(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// Returns the direction the word runs in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the occupied positions in word order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the number of letters in the word.
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns the occupied positions as an unordered set.
    #[must_use]
    pub fn position_set(&self) -> BTreeSet<Position> {
        self.positions.iter().copied().collect()
    }

    /// Returns the word's letters paired with the positions they occupy.
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.positions.iter().copied().zip(self.word.chars())
    }
}
