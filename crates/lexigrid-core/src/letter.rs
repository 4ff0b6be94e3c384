//! Uppercase letter representation.

use std::fmt::{self, Display};

/// An uppercase ASCII letter in the range `A`-`Z`.
///
/// Every filled grid cell holds exactly one `Letter`. Lowercase input is
/// normalized to uppercase on construction; anything else is rejected.
///
/// # Examples
///
/// ```
/// use lexigrid_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert!(Letter::from_char('7').is_none());
/// assert_eq!(Letter::ALL.len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Array containing all letters from `A` to `Z`.
    pub const ALL: [Self; 26] = {
        let mut all = [Self(b'A'); 26];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 26 {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from a `char`, uppercasing ASCII lowercase input.
    ///
    /// Returns `None` if `ch` is not an ASCII letter.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            #[expect(clippy::cast_possible_truncation)]
            Some(Self(ch.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Creates a letter from its alphabet index (`0` for `A`, `25` for `Z`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 26, "Invalid letter index");
        Self(b'A' + index)
    }

    /// Returns the letter as an uppercase `char`.
    #[must_use]
    #[inline]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns the alphabet index of this letter (`0` for `A`).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
