//! Selection validation.
//!
//! A player claims a word by selecting the cells it occupies. This module
//! decides whether the selected cells form a straight line and which placed
//! word, if any, occupies exactly those cells.
//!
//! Matching works on sets: the order in which cells were selected never
//! changes the result, and a selection must cover a placement exactly. There
//! is no partial or substring matching. A selection that names the same cell
//! twice is not a line and never matches.

use std::collections::BTreeSet;

use lexigrid_core::{LineKind, Placement, Position};

/// Result of checking a selection against known placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionMatch<'a> {
    /// The line shape of the selection, or `None` if it is not a straight,
    /// gap-free line of at least two cells.
    pub line: Option<LineKind>,
    /// The exactly matching placement and its index in the searched slice.
    pub matched: Option<(usize, &'a Placement)>,
}

impl<'a> SelectionMatch<'a> {
    /// A selection that matches nothing.
    pub const NONE: Self = Self {
        line: None,
        matched: None,
    };

    /// Returns `true` if the selection identified a placed word.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }

    /// Returns the matched placement.
    #[must_use]
    pub fn placement(&self) -> Option<&'a Placement> {
        self.matched.map(|(_, placement)| placement)
    }

    /// Returns the matched word.
    #[must_use]
    pub fn word(&self) -> Option<&'a str> {
        self.placement().map(Placement::word)
    }
}

/// Determines the line shape formed by `selected`.
///
/// Returns `None` for fewer than two positions, for a selection that repeats
/// a position, for positions that are not collinear along a row, column, or
/// diagonal, and for horizontal or vertical lines with a gap between
/// neighbouring cells.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{LineKind, Position};
/// use lexigrid_game::selection::classify;
///
/// let p = |row, col| Position::new(row, col);
/// assert_eq!(classify(&[p(0, 2), p(0, 0), p(0, 1)]), Some(LineKind::Horizontal));
/// assert_eq!(classify(&[p(3, 1), p(2, 2), p(1, 3)]), Some(LineKind::AntiDiagonal));
/// assert_eq!(classify(&[p(0, 0), p(0, 2)]), None); // gap
/// assert_eq!(classify(&[p(0, 0), p(1, 1), p(2, 3)]), None); // not collinear
/// assert_eq!(classify(&[p(0, 0)]), None);
/// assert_eq!(classify(&[p(0, 0), p(0, 1), p(0, 1)]), None); // repeat
/// ```
#[must_use]
pub fn classify(selected: &[Position]) -> Option<LineKind> {
    let (&first, rest) = selected.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let unique: BTreeSet<&Position> = selected.iter().collect();
    if unique.len() != selected.len() {
        return None;
    }

    let line = if rest.iter().all(|pos| pos.row() == first.row()) {
        LineKind::Horizontal
    } else if rest.iter().all(|pos| pos.col() == first.col()) {
        LineKind::Vertical
    } else if rest
        .iter()
        .all(|pos| pos.row() + first.col() == pos.col() + first.row())
    {
        LineKind::Diagonal
    } else if rest
        .iter()
        .all(|pos| pos.row() + pos.col() == first.row() + first.col())
    {
        LineKind::AntiDiagonal
    } else {
        return None;
    };

    if matches!(line, LineKind::Horizontal | LineKind::Vertical) {
        let mut sorted = selected.to_vec();
        sorted.sort_unstable();
        let has_gap = sorted.windows(2).any(|pair| {
            pair[1].row() - pair[0].row() > 1 || pair[1].col().abs_diff(pair[0].col()) > 1
        });
        if has_gap {
            return None;
        }
    }

    Some(line)
}

/// Classifies `selected` and looks for the placement occupying exactly those
/// cells.
///
/// A placement is only searched for when the selection forms a valid line.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Direction, LineKind, Placement, Position};
/// use lexigrid_game::selection::classify_and_match;
///
/// let p = |row, col| Position::new(row, col);
/// let cat = Placement::new(
///     "CAT".to_owned(),
///     p(0, 0),
///     Direction::Horizontal,
///     vec![p(0, 0), p(0, 1), p(0, 2)],
/// );
/// let placements = [cat];
///
/// let result = classify_and_match(&[p(0, 2), p(0, 0), p(0, 1)], &placements);
/// assert_eq!(result.line, Some(LineKind::Horizontal));
/// assert_eq!(result.word(), Some("CAT"));
///
/// // Part of a word is not a match.
/// let result = classify_and_match(&[p(0, 0), p(0, 1)], &placements);
/// assert_eq!(result.line, Some(LineKind::Horizontal));
/// assert!(!result.is_match());
/// ```
#[must_use]
pub fn classify_and_match<'a>(selected: &[Position], placements: &'a [Placement]) -> SelectionMatch<'a> {
    let Some(line) = classify(selected) else {
        return SelectionMatch::NONE;
    };

    let selected: BTreeSet<Position> = selected.iter().copied().collect();
    let matched = placements
        .iter()
        .enumerate()
        .find(|(_, placement)| {
            placement.len() == selected.len() && placement.position_set() == selected
        });

    SelectionMatch {
        line: Some(line),
        matched,
    }
}

#[cfg(test)]
mod tests {
    use lexigrid_core::Direction;
    use proptest::prelude::*;

    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn placement(word: &str, start: Position, direction: Direction) -> Placement {
        let positions = (0..word.len())
            .map(|i| direction.step(start, i, 20).unwrap())
            .collect();
        Placement::new(word.to_owned(), start, direction, positions)
    }

    #[test]
    fn test_line_shapes() {
        assert_eq!(classify(&[p(2, 5), p(2, 4)]), Some(LineKind::Horizontal));
        assert_eq!(classify(&[p(1, 3), p(3, 3), p(2, 3)]), Some(LineKind::Vertical));
        assert_eq!(classify(&[p(1, 1), p(3, 3), p(2, 2)]), Some(LineKind::Diagonal));
        assert_eq!(classify(&[p(2, 0), p(0, 2), p(1, 1)]), Some(LineKind::AntiDiagonal));
        assert_eq!(classify(&[p(0, 0), p(1, 2)]), None);
        assert_eq!(classify(&[]), None);
    }

    #[test]
    fn test_gaps_invalidate_straight_lines() {
        assert_eq!(classify(&[p(0, 0), p(0, 1), p(0, 3)]), None);
        assert_eq!(classify(&[p(0, 4), p(2, 4)]), None);
        // Diagonal selections are not checked for gaps; a gapped diagonal
        // still cannot equal any placement.
        assert_eq!(classify(&[p(0, 0), p(2, 2)]), Some(LineKind::Diagonal));
    }

    #[test]
    fn test_repeated_cells_never_match() {
        let placements = [
            placement("A", p(0, 0), Direction::Horizontal),
            placement("AB", p(0, 0), Direction::Horizontal),
        ];
        assert_eq!(classify(&[p(0, 0), p(0, 0)]), None);
        assert_eq!(
            classify_and_match(&[p(0, 0), p(0, 0)], &placements),
            SelectionMatch::NONE
        );
        assert_eq!(
            classify_and_match(&[p(0, 0), p(0, 1), p(0, 1)], &placements),
            SelectionMatch::NONE
        );
        assert_eq!(
            classify_and_match(&[p(0, 1), p(0, 0)], &placements).word(),
            Some("AB")
        );
    }

    #[test]
    fn test_scenario_cat_selection_in_any_order() {
        let placements = [
            placement("CAT", p(0, 0), Direction::Horizontal),
            placement("DOG", p(4, 0), Direction::DiagonalUpRight),
        ];
        let cells = [p(0, 0), p(0, 1), p(0, 2)];
        for order in [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
            let selected = order.map(|i| cells[i]);
            let result = classify_and_match(&selected, &placements);
            assert!(result.is_match());
            assert_eq!(result.word(), Some("CAT"));
            assert_eq!(result.line.map(LineKind::name), Some("horizontal"));
            assert_eq!(result.matched.map(|(i, _)| i), Some(0));
        }

        let result = classify_and_match(&[p(2, 2), p(4, 0), p(3, 1)], &placements);
        assert_eq!(result.word(), Some("DOG"));
        assert_eq!(result.line, Some(LineKind::AntiDiagonal));
    }

    #[test]
    fn test_scenario_non_collinear_never_matches() {
        let placements = [placement("COW", p(0, 0), Direction::DiagonalDownRight)];
        let result = classify_and_match(&[p(0, 0), p(1, 1), p(2, 3)], &placements);
        assert_eq!(result, SelectionMatch::NONE);
    }

    #[test]
    fn test_superset_and_subset_do_not_match() {
        let placements = [placement("BEE", p(1, 1), Direction::Vertical)];
        assert!(!classify_and_match(&[p(1, 1), p(2, 1)], &placements).is_match());
        assert!(!classify_and_match(&[p(0, 1), p(1, 1), p(2, 1), p(3, 1)], &placements).is_match());
        assert!(classify_and_match(&[p(3, 1), p(1, 1), p(2, 1)], &placements).is_match());
    }

    #[test]
    fn test_reversed_word_matches_same_cells() {
        let placements = [placement("TAC", p(0, 2), Direction::HorizontalReverse)];
        let result = classify_and_match(&[p(0, 0), p(0, 1), p(0, 2)], &placements);
        assert_eq!(result.word(), Some("TAC"));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_matching_is_order_independent(
            len in 2usize..8,
            row in 0usize..20,
            col in 0usize..20,
            direction in arb_direction(),
            shuffle in any::<prop::sample::Index>(),
        ) {
            let start = p(row, col);
            prop_assume!(direction.step(start, len - 1, 20).is_some());
            let word: String = "ABCDEFGH".chars().take(len).collect();
            let placements = [placement(&word, start, direction)];

            let mut selected = placements[0].positions().to_vec();
            let forward = classify_and_match(&selected, &placements);
            let rotate = shuffle.index(selected.len());
            selected.rotate_left(rotate);
            selected.reverse();
            let shuffled = classify_and_match(&selected, &placements);

            prop_assert!(forward.is_match());
            prop_assert_eq!(forward, shuffled);
        }
    }
}
