//! Test utilities for placement logic.
//!
//! This module provides [`GridTester`], a small fluent harness for checking
//! which placements fit on a grid and what the grid looks like afterwards.
//!
//! # Example
//!
//! ```
//! use lexigrid_core::{Direction, Position};
//! use lexigrid_generator::testing::GridTester;
//!
//! GridTester::from_str(
//!     "
//!     C....
//!     .....
//!     .....
//!     .....
//!     .....
//!     ",
//! )
//! .assert_rejects("DOG", Position::new(0, 0), Direction::Horizontal)
//! .place("CAT", Position::new(0, 0), Direction::Horizontal)
//! .assert_positions(&[(0, 0), (0, 1), (0, 2)])
//! .assert_grid(
//!     "
//!     CAT..
//!     .....
//!     .....
//!     .....
//!     .....
//!     ",
//! );
//! ```

use lexigrid_core::{Direction, LetterGrid, Position};

use crate::placement::{CrossingPolicy, can_place_with, commit_place};

/// A fluent harness around a [`LetterGrid`] for placement tests.
///
/// All assertion methods panic with descriptive messages on failure and use
/// `#[track_caller]` so the failing line in the test is reported.
#[derive(Debug)]
pub struct GridTester {
    grid: LetterGrid,
    crossing: CrossingPolicy,
    last_positions: Vec<Position>,
}

impl GridTester {
    /// Starts from an empty `size`×`size` grid.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self::from_grid(LetterGrid::new(size))
    }

    /// Starts from an existing grid.
    #[must_use]
    pub fn from_grid(grid: LetterGrid) -> Self {
        Self {
            grid,
            crossing: CrossingPolicy::Allow,
            last_positions: Vec::new(),
        }
    }

    /// Starts from the text form of a grid.
    ///
    /// Rows may be indented; `.` marks an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid grid.
    #[must_use]
    #[track_caller]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let grid = s
            .parse()
            .unwrap_or_else(|e| panic!("invalid grid text: {e}"));
        Self::from_grid(grid)
    }

    /// Sets the crossing policy used by later checks.
    #[must_use]
    pub fn crossing(mut self, crossing: CrossingPolicy) -> Self {
        self.crossing = crossing;
        self
    }

    /// Returns the grid under test.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Asserts that `word` fits without changing the grid.
    #[track_caller]
    pub fn assert_fits(self, word: &str, start: Position, direction: Direction) -> Self {
        assert!(
            can_place_with(&self.grid, word, start, direction, self.crossing),
            "expected {word} to fit at {start} going {direction}\n{}",
            self.grid
        );
        self
    }

    /// Asserts that `word` does not fit.
    #[track_caller]
    pub fn assert_rejects(self, word: &str, start: Position, direction: Direction) -> Self {
        assert!(
            !can_place_with(&self.grid, word, start, direction, self.crossing),
            "expected {word} to be rejected at {start} going {direction}\n{}",
            self.grid
        );
        self
    }

    /// Asserts that `word` fits, then commits it.
    #[track_caller]
    pub fn place(mut self, word: &str, start: Position, direction: Direction) -> Self {
        self = self.assert_fits(word, start, direction);
        self.last_positions = commit_place(&mut self.grid, word, start, direction);
        self
    }

    /// Asserts the positions returned by the most recent [`place`](Self::place).
    #[track_caller]
    pub fn assert_positions(self, expected: &[(usize, usize)]) -> Self {
        let expected: Vec<Position> = expected.iter().copied().map(Position::from).collect();
        assert_eq!(self.last_positions, expected, "committed positions differ");
        self
    }

    /// Asserts the letters along the most recently committed positions.
    #[track_caller]
    pub fn assert_reads(self, word: &str) -> Self {
        assert_eq!(
            self.grid.read(&self.last_positions).as_deref(),
            Some(word),
            "grid does not spell {word} along {:?}",
            self.last_positions
        );
        self
    }

    /// Asserts that the grid matches the given text form.
    #[track_caller]
    pub fn assert_grid(self, expected: &str) -> Self {
        let expected: LetterGrid = expected
            .parse()
            .unwrap_or_else(|e| panic!("invalid expected grid text: {e}"));
        assert_eq!(
            self.grid, expected,
            "grid mismatch\nactual:\n{}\nexpected:\n{expected}",
            self.grid
        );
        self
    }
}
