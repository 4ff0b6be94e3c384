//! Grid position representation.

use std::fmt::{self, Display};

/// A cell coordinate on a square grid, zero-based.
///
/// Positions order row-major (by `row`, then `col`), which is the order used
/// when checking a selection for gaps.
///
/// # Examples
///
/// ```
/// use lexigrid_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.to_index(5), 13);
/// assert_eq!(Position::from_index(13, 5), pos);
/// assert_eq!(pos.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 at the top).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0 at the left).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if this position lies inside a `size`×`size` grid.
    #[must_use]
    #[inline]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the row-major index of this position in a `size`×`size` grid.
    #[must_use]
    #[inline]
    pub const fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Converts a row-major index back into a position.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }

    /// Returns the position reached by moving `steps` times along `(d_row, d_col)`.
    ///
    /// Returns `None` if the result would leave the `size`×`size` grid.
    #[must_use]
    pub fn offset(self, (d_row, d_col): (isize, isize), steps: usize, size: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(d_row.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(steps)?)?;
        let pos = Self::new(row, col);
        pos.is_within(size).then_some(pos)
    }

    /// Returns an iterator over every position of a `size`×`size` grid in row-major order.
    pub fn all(size: usize) -> impl Iterator<Item = Self> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Self::new(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_offset_stays_in_bounds() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.offset((0, 1), 4, 5), Some(Position::new(0, 4)));
        assert_eq!(origin.offset((0, 1), 5, 5), None);
        assert_eq!(origin.offset((-1, 0), 1, 5), None);
        assert_eq!(origin.offset((1, 1), 0, 5), Some(origin));
        assert_eq!(
            Position::new(4, 4).offset((-1, -1), 4, 5),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Position::all(3).collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[3], Position::new(1, 0));
        assert!(all.is_sorted());
    }

    proptest! {
        #[test]
        fn test_index_round_trip(size in 1usize..32, seed in any::<usize>()) {
            let index = seed % (size * size);
            let pos = Position::from_index(index, size);
            prop_assert!(pos.is_within(size));
            prop_assert_eq!(pos.to_index(size), index);
        }
    }
}
