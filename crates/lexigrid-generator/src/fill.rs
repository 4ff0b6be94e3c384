use lexigrid_core::{Letter, LetterGrid};
use rand::{Rng, RngExt as _, distr::Distribution as _, distr::weighted::WeightedIndex};

/// Relative weight of each letter `A`-`Z` when filling empty cells.
///
/// Vowels and common consonants are weighted higher than rare letters such
/// as `Q`, `X`, and `Z`, so filler text looks more like real words.
pub const LETTER_WEIGHTS: [u32; 26] = [
    8,  // A
    2,  // B
    3,  // C
    4,  // D
    12, // E
    2,  // F
    3,  // G
    6,  // H
    7,  // I
    1,  // J
    1,  // K
    4,  // L
    2,  // M
    7,  // N
    8,  // O
    2,  // P
    1,  // Q
    6,  // R
    6,  // S
    9,  // T
    3,  // U
    1,  // V
    2,  // W
    1,  // X
    2,  // Y
    1,  // Z
];

/// How the generator completes cells that no word occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum FillStrategy {
    /// Every letter is equally likely.
    Uniform,
    /// Letters are drawn according to [`LETTER_WEIGHTS`].
    #[default]
    Weighted,
}

/// Writes an independently drawn random letter into every empty cell.
///
/// Cells that already hold a letter are left untouched. Returns the number
/// of cells filled.
///
/// # Examples
///
/// ```
/// use lexigrid_core::LetterGrid;
/// use lexigrid_generator::{FillStrategy, PuzzleSeed, fill_empty_cells};
///
/// let mut grid: LetterGrid = "C..\n.A.\n..T".parse().unwrap();
/// let mut rng = PuzzleSeed::from_phrase("fill").to_rng();
/// let filled = fill_empty_cells(&mut grid, FillStrategy::Weighted, &mut rng);
/// assert_eq!(filled, 6);
/// assert!(grid.is_filled());
/// assert_eq!(grid.to_string().chars().next(), Some('C'));
/// ```
pub fn fill_empty_cells<R>(grid: &mut LetterGrid, strategy: FillStrategy, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let empty: Vec<_> = grid.empty_positions().collect();
    match strategy {
        FillStrategy::Uniform => {
            for &pos in &empty {
                grid.set(pos, Letter::from_index(rng.random_range(0..26)));
            }
        }
        FillStrategy::Weighted => {
            let weights = WeightedIndex::<u32>::new(LETTER_WEIGHTS)
                .expect("letter weights are positive and finite");
            for &pos in &empty {
                #[expect(clippy::cast_possible_truncation)]
                let index = weights.sample(rng) as u8;
                grid.set(pos, Letter::from_index(index));
            }
        }
    }
    empty.len()
}
