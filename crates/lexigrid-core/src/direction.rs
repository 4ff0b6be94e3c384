//! Word placement directions.

use std::fmt::{self, Display};

use bitflags::bitflags;

use crate::Position;

/// One of the eight straight-line directions a word can run in.
///
/// Each direction has a unit vector `(d_row, d_col)`; letter `i` of a word
/// starting at `start` lands on `start + i * (d_row, d_col)`.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Direction, Position};
///
/// assert_eq!(Direction::Horizontal.delta(), (0, 1));
/// assert_eq!(Direction::DiagonalUpLeft.delta(), (-1, -1));
///
/// let start = Position::new(4, 0);
/// assert_eq!(
///     Direction::DiagonalUpRight.step(start, 2, 5),
///     Some(Position::new(2, 2))
/// );
/// assert_eq!(Direction::VerticalReverse.step(Position::new(0, 0), 1, 5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Left to right, `(0, +1)`.
    Horizontal,
    /// Top to bottom, `(+1, 0)`.
    Vertical,
    /// Towards the bottom right, `(+1, +1)`.
    DiagonalDownRight,
    /// Towards the bottom left, `(+1, -1)`.
    DiagonalDownLeft,
    /// Right to left, `(0, -1)`.
    HorizontalReverse,
    /// Bottom to top, `(-1, 0)`.
    VerticalReverse,
    /// Towards the top right, `(-1, +1)`.
    DiagonalUpRight,
    /// Towards the top left, `(-1, -1)`.
    DiagonalUpLeft,
}

impl Direction {
    /// Array containing all eight directions.
    pub const ALL: [Self; 8] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDownRight,
        Self::DiagonalDownLeft,
        Self::HorizontalReverse,
        Self::VerticalReverse,
        Self::DiagonalUpRight,
        Self::DiagonalUpLeft,
    ];

    /// Returns the unit vector `(d_row, d_col)` of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDownRight => (1, 1),
            Self::DiagonalDownLeft => (1, -1),
            Self::HorizontalReverse => (0, -1),
            Self::VerticalReverse => (-1, 0),
            Self::DiagonalUpRight => (-1, 1),
            Self::DiagonalUpLeft => (-1, -1),
        }
    }

    /// Returns the lowercase, hyphenated name used in serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalDownRight => "diagonal-down-right",
            Self::DiagonalDownLeft => "diagonal-down-left",
            Self::HorizontalReverse => "horizontal-reverse",
            Self::VerticalReverse => "vertical-reverse",
            Self::DiagonalUpRight => "diagonal-up-right",
            Self::DiagonalUpLeft => "diagonal-up-left",
        }
    }

    /// Looks up a direction by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.name() == name)
    }

    /// Returns the position `steps` cells away from `start` along this direction.
    ///
    /// Returns `None` if that position lies outside a `size`×`size` grid.
    #[must_use]
    #[inline]
    pub fn step(self, start: Position, steps: usize, size: usize) -> Option<Position> {
        start.offset(self.delta(), steps, size)
    }

    /// Returns the range of start rows (or columns, for `axis_delta` taken
    /// from the column component) that keep a word of `len` letters inside
    /// a grid of `size` cells along one axis.
    ///
    /// Returns `None` if no start fits.
    #[must_use]
    pub fn start_range(axis_delta: isize, len: usize, size: usize) -> Option<std::ops::Range<usize>> {
        if len == 0 || len > size {
            return None;
        }
        Some(match axis_delta {
            0 => 0..size,
            d if d > 0 => 0..size - len + 1,
            _ => len - 1..size,
        })
    }

    /// Returns the flag for this direction within a [`DirectionSet`].
    #[must_use]
    pub const fn as_set(self) -> DirectionSet {
        match self {
            Self::Horizontal => DirectionSet::HORIZONTAL,
            Self::Vertical => DirectionSet::VERTICAL,
            Self::DiagonalDownRight => DirectionSet::DIAGONAL_DOWN_RIGHT,
            Self::DiagonalDownLeft => DirectionSet::DIAGONAL_DOWN_LEFT,
            Self::HorizontalReverse => DirectionSet::HORIZONTAL_REVERSE,
            Self::VerticalReverse => DirectionSet::VERTICAL_REVERSE,
            Self::DiagonalUpRight => DirectionSet::DIAGONAL_UP_RIGHT,
            Self::DiagonalUpLeft => DirectionSet::DIAGONAL_UP_LEFT,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of [`Direction`]s the generator may place words in.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_core::{Direction, DirectionSet};
    ///
    /// let simple = DirectionSet::SIMPLE;
    /// assert_eq!(simple.directions().count(), 3);
    /// assert!(simple.contains(Direction::Vertical.as_set()));
    /// assert!(!simple.contains(Direction::HorizontalReverse.as_set()));
    ///
    /// assert_eq!(DirectionSet::ALL.directions().count(), 8);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u8 {
        /// [`Direction::Horizontal`].
        const HORIZONTAL = 1 << 0;
        /// [`Direction::Vertical`].
        const VERTICAL = 1 << 1;
        /// [`Direction::DiagonalDownRight`].
        const DIAGONAL_DOWN_RIGHT = 1 << 2;
        /// [`Direction::DiagonalDownLeft`].
        const DIAGONAL_DOWN_LEFT = 1 << 3;
        /// [`Direction::HorizontalReverse`].
        const HORIZONTAL_REVERSE = 1 << 4;
        /// [`Direction::VerticalReverse`].
        const VERTICAL_REVERSE = 1 << 5;
        /// [`Direction::DiagonalUpRight`].
        const DIAGONAL_UP_RIGHT = 1 << 6;
        /// [`Direction::DiagonalUpLeft`].
        const DIAGONAL_UP_LEFT = 1 << 7;

        /// Forward-only directions: horizontal, vertical, and down-right diagonal.
        const SIMPLE = Self::HORIZONTAL.bits()
            | Self::VERTICAL.bits()
            | Self::DIAGONAL_DOWN_RIGHT.bits();
        /// All eight directions.
        const ALL = 0xff;
    }
}

impl DirectionSet {
    /// Returns the directions in this set, in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |dir| self.contains(dir.as_set()))
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Direction> for DirectionSet {
    fn from(dir: Direction) -> Self {
        dir.as_set()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, dir| set | dir.as_set())
    }
}
