//! Placement validation and commitment.
//!
//! [`can_place`] decides whether a word fits at a start cell in a direction;
//! [`commit_place`] writes it. The generator always checks before it commits.
//!
//! # Crossing
//!
//! Two words may share a cell when their letters agree there. A cell holding
//! a different letter always blocks a placement. [`CrossingPolicy::Forbid`]
//! additionally blocks any occupied cell.
//!
//! # Examples
//!
//! ```
//! use lexigrid_core::{Direction, LetterGrid, Position};
//! use lexigrid_generator::placement::{can_place, commit_place};
//!
//! let mut grid = LetterGrid::new(5);
//! let start = Position::new(0, 0);
//! assert!(can_place(&grid, "CAT", start, Direction::Horizontal));
//! let positions = commit_place(&mut grid, "CAT", start, Direction::Horizontal);
//! assert_eq!(
//!     positions,
//!     [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
//! );
//!
//! // "CAR" crosses "CAT" on the shared C.
//! assert!(can_place(&grid, "CAR", start, Direction::Vertical));
//! // "DOG" would overwrite the C.
//! assert!(!can_place(&grid, "DOG", start, Direction::Vertical));
//! ```

use lexigrid_core::{Direction, Letter, LetterGrid, Position};

/// Whether a new word may reuse cells already holding a matching letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum CrossingPolicy {
    /// Shared cells are allowed when the letters agree.
    #[default]
    Allow,
    /// Every target cell must be empty.
    Forbid,
}

/// Returns `true` if `word` can be written from `start` along `direction`,
/// allowing crossings where letters agree.
///
/// Equivalent to [`can_place_with`] with [`CrossingPolicy::Allow`].
#[must_use]
pub fn can_place(grid: &LetterGrid, word: &str, start: Position, direction: Direction) -> bool {
    can_place_with(grid, word, start, direction, CrossingPolicy::Allow)
}

/// Returns `true` if `word` can be written from `start` along `direction`
/// under the given crossing policy.
///
/// A placement is rejected when any letter would land outside the grid, when
/// a target cell holds a different letter, or (under
/// [`CrossingPolicy::Forbid`]) when a target cell holds any letter. Words
/// containing characters other than ASCII letters never fit.
#[must_use]
pub fn can_place_with(
    grid: &LetterGrid,
    word: &str,
    start: Position,
    direction: Direction,
    crossing: CrossingPolicy,
) -> bool {
    if word.is_empty() {
        return false;
    }
    word.chars().enumerate().all(|(i, ch)| {
        let Some(letter) = Letter::from_char(ch) else {
            return false;
        };
        let Some(pos) = direction.step(start, i, grid.size()) else {
            return false;
        };
        match grid[pos] {
            None => true,
            Some(existing) => crossing.is_allow() && existing == letter,
        }
    })
}

/// Writes `word` from `start` along `direction` and returns the positions it
/// occupies, in word order.
///
/// No validation is performed beyond bounds; call [`can_place`] (or
/// [`can_place_with`]) first. Existing letters in the path are overwritten.
///
/// # Panics
///
/// Panics if the word runs outside the grid or contains a character that is
/// not an ASCII letter.
pub fn commit_place(
    grid: &mut LetterGrid,
    word: &str,
    start: Position,
    direction: Direction,
) -> Vec<Position> {
    let size = grid.size();
    word.chars()
        .enumerate()
        .map(|(i, ch)| {
            let pos = direction
                .step(start, i, size)
                .unwrap_or_else(|| panic!("{word} runs outside the grid from {start} {direction}"));
            let letter = Letter::from_char(ch)
                .unwrap_or_else(|| panic!("{word} contains non-letter {ch:?}"));
            grid.set(pos, letter);
            pos
        })
        .collect()
}
