use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that reproduces a generated puzzle.
///
/// The seed displays and parses as 64 lowercase hexadecimal characters. The
/// same seed, word list, and [`GeneratorConfig`](crate::GeneratorConfig)
/// always yield the same puzzle.
///
/// # Examples
///
/// ```
/// use lexigrid_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.as_bytes()[1], 0x11);
/// assert_eq!(seed.to_string().len(), 64);
///
/// // Phrases hash to a stable seed.
/// assert_eq!(PuzzleSeed::from_phrase("monday"), PuzzleSeed::from_phrase("monday"));
/// assert_ne!(PuzzleSeed::from_phrase("monday"), PuzzleSeed::from_phrase("tuesday"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a text phrase using SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the deterministic random number generator for this seed.
    #[must_use]
    pub fn to_rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input was not 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contained a non-hexadecimal character.
    #[display("invalid hex character at offset {offset}")]
    InvalidHex {
        /// Character offset of the first invalid digit.
        offset: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 || !s.is_ascii() {
            return Err(SeedParseError::InvalidLength {
                len: s.chars().count(),
            });
        }

        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let offset = i * 2;
            *byte = u8::from_str_radix(&s[offset..offset + 2], 16).map_err(|_| {
                let bad = s[offset..offset + 2]
                    .bytes()
                    .position(|b| !b.is_ascii_hexdigit())
                    .unwrap_or(0);
                SeedParseError::InvalidHex {
                    offset: offset + bad,
                }
            })?;
        }
        Ok(Self(bytes))
    }
}

impl From<PuzzleSeed> for String {
    fn from(seed: PuzzleSeed) -> Self {
        seed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from([0xab; 32]);
        let text = seed.to_string();
        assert_eq!(text, "ab".repeat(32));
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
        assert_eq!(text.to_uppercase().parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { len: 4 })
        );
        let mut text = "0".repeat(64);
        text.replace_range(5..6, "g");
        assert_eq!(
            text.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidHex { offset: 5 })
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = PuzzleSeed::from_phrase("lexigrid");
        let a: Vec<u32> = {
            let mut rng = seed.to_rng();
            (0..8).map(|_| rng.random()).collect()
        };
        let b: Vec<u32> = {
            let mut rng = seed.to_rng();
            (0..8).map(|_| rng.random()).collect()
        };
        assert_eq!(a, b);
    }
}
