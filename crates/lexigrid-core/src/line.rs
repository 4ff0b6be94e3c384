//! Line shapes of player selections.

use std::fmt::{self, Display};

/// The straight-line shape formed by a set of selected positions.
///
/// Unlike [`Direction`](crate::Direction), a line kind has no orientation:
/// a selection is an unordered set of cells, so `CAT` read left to right and
/// `TAC` read right to left form the same horizontal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// All positions share one row.
    Horizontal,
    /// All positions share one column.
    Vertical,
    /// Positions run along a down-right slope (`row - col` is constant).
    Diagonal,
    /// Positions run along a down-left slope (`row + col` is constant).
    AntiDiagonal,
}

impl LineKind {
    /// Returns the lowercase name used in serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Diagonal => "diagonal",
            Self::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
