//! Core data structures for word-search puzzles.
//!
//! This crate provides the value types shared by puzzle generation, selection
//! checking, and play-session management.
//!
//! # Overview
//!
//! 1. **Cell contents** - What a grid cell can hold
//!    - [`letter`]: Type-safe uppercase letter `A`-`Z`
//!    - [`grid`]: Square letter grid with optional (unfilled) cells
//!
//! 2. **Geometry** - Where words live on the grid
//!    - [`position`]: `(row, col)` coordinates
//!    - [`direction`]: The eight placement directions and [`DirectionSet`]
//!    - [`line`]: Line shapes recognized in player selections
//!
//! 3. **Puzzle records**
//!    - [`placement`]: A word bound to its start, direction, and cells
//!
//! # Examples
//!
//! ```
//! use lexigrid_core::{Direction, Letter, LetterGrid, Position};
//!
//! let mut grid = LetterGrid::new(5);
//! let start = Position::new(0, 0);
//! for (i, ch) in "CAT".chars().enumerate() {
//!     let pos = Direction::Horizontal.step(start, i, grid.size()).unwrap();
//!     grid.set(pos, Letter::from_char(ch).unwrap());
//! }
//! assert_eq!(grid.get(Position::new(0, 1)), Letter::from_char('A'));
//! assert!(!grid.is_filled());
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod line;
pub mod placement;
pub mod position;

pub use self::{
    direction::{Direction, DirectionSet},
    grid::{GridParseError, LetterGrid},
    letter::Letter,
    line::LineKind,
    placement::Placement,
    position::Position,
};
