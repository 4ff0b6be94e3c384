//! Square letter grid.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{Letter, Position};

/// A square `size`×`size` matrix of optional letters, stored row-major.
///
/// Cells start empty while a puzzle is being built; a finished puzzle has a
/// letter in every cell.
///
/// The text form has one line per row with one character per cell, `.` for
/// an empty cell. Leading and trailing whitespace around each line is ignored
/// when parsing, and lowercase letters are accepted.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Letter, LetterGrid, Position};
///
/// let grid: LetterGrid = "
///     CAT
///     ...
///     DOG
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Position::new(2, 1)], Letter::from_char('O'));
/// assert_eq!(grid[Position::new(1, 1)], None);
/// assert_eq!(grid.empty_positions().count(), 3);
/// assert_eq!(grid.to_string(), "CAT\n...\nDOG");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Creates an empty grid of `size`×`size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `size * size` overflows `usize`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        let len = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("grid size {size} is too large"));
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// Returns the letter at `pos`, or `None` if the cell is empty or `pos`
    /// is outside the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    /// Writes `letter` into the cell at `pos`, replacing any previous letter.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn set(&mut self, pos: Position, letter: Letter) {
        assert!(self.contains(pos), "position {pos} outside grid of size {}", self.size);
        self.cells[pos.to_index(self.size)] = Some(letter);
    }

    /// Returns `true` if every cell holds a letter.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the positions of all empty cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| Position::from_index(i, size))
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Letter>] {
        &self.cells
    }

    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Letter>]> {
        self.cells.chunks(self.size)
    }

    /// Reads the letters at `positions` in order.
    ///
    /// Returns `None` if any position is empty or outside the grid.
    #[must_use]
    pub fn read(&self, positions: &[Position]) -> Option<String> {
        positions
            .iter()
            .map(|&pos| self.get(pos).map(Letter::as_char))
            .collect()
    }
}

impl Index<Position> for LetterGrid {
    type Output = Option<Letter>;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} outside grid of size {}", self.size);
        &self.cells[pos.to_index(self.size)]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.map_or('.', Letter::as_char))?;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`LetterGrid`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contained no rows.
    #[display("grid text is empty")]
    Empty,
    /// A row's length did not match the number of rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Expected number of cells (the number of rows).
        expected: usize,
    },
    /// A character was neither a letter nor `.`.
    #[display("invalid character {ch:?} at {pos}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Where it appeared.
        pos: Position,
    },
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GridParseError::Empty);
        }

        let size = rows.len();
        let mut grid = Self::new(size);
        for (row, line) in rows.into_iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(GridParseError::RowLength {
                    row,
                    len,
                    expected: size,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                if ch == '.' {
                    continue;
                }
                let letter = Letter::from_char(ch).ok_or(GridParseError::InvalidChar { ch, pos })?;
                grid.set(pos, letter);
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let grid: LetterGrid = "ab\n.c".parse().unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.to_string(), "AB\n.C");
        assert!(!grid.is_filled());
        assert_eq!(grid.empty_positions().collect::<Vec<_>>(), [Position::new(1, 0)]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LetterGrid>(), Err(GridParseError::Empty));
        assert_eq!(
            "AB\nC".parse::<LetterGrid>(),
            Err(GridParseError::RowLength {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            "A1\nBC".parse::<LetterGrid>(),
            Err(GridParseError::InvalidChar {
                ch: '1',
                pos: Position::new(0, 1)
            })
        );
    }

    #[test]
    fn test_read_along_positions() {
        let grid: LetterGrid = "
            CAT
            .O.
            ..G
        "
        .parse()
        .unwrap();
        let diagonal = [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)];
        assert_eq!(grid.read(&diagonal).as_deref(), Some("COG"));
        assert_eq!(grid.read(&[Position::new(1, 0)]), None);
        assert_eq!(grid.read(&[Position::new(3, 0)]), None);
    }

    #[test]
    fn test_get_outside_is_none() {
        let grid = LetterGrid::new(2);
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert!(!grid.contains(Position::new(0, 2)));
    }

    #[test]
    #[should_panic(expected = "grid size must be at least 1")]
    fn test_zero_size_panics() {
        let _ = LetterGrid::new(0);
    }

    #[test]
    #[should_panic(expected = "is too large")]
    fn test_overflowing_size_panics() {
        let _ = LetterGrid::new(1 << (usize::BITS / 2));
    }
}
