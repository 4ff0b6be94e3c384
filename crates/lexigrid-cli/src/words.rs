//! Built-in levels and their word lists.

use std::time::Duration;

use clap::ValueEnum;

/// Words offered per level before truncation to [`Level::word_count`].
const EASY_WORDS: &[&str] = &[
    "CAT", "DOG", "SUN", "MOON", "STAR", "FISH", "BIRD", "TREE", "BOOK", "BALL",
];
const MEDIUM_WORDS: &[&str] = &[
    "APPLE", "GRAPE", "TIGER", "ZEBRA", "HAPPY", "SMILE", "OCEAN", "RIVER", "PIZZA", "BREAD",
];
const HARD_WORDS: &[&str] = &[
    "DRAGON", "CASTLE", "ROCKET", "PLANET", "JUNGLE", "FOREST", "RAINBOW", "DOLPHIN", "PENGUIN",
    "OCTOPUS",
];
const EXPERT_WORDS: &[&str] = &[
    "ADVENTURE",
    "DISCOVERY",
    "MYSTERIOUS",
    "TREASURE",
    "EXPLORATION",
    "CHALLENGE",
    "VICTORY",
    "CELEBRATION",
];

/// A difficulty level with its word list, grid size, time limit and unlock score.
///
/// Levels are numbered from 1 in the order easy, medium, hard, expert. Each
/// level is unlocked by reaching 100 points per preceding level.
///
/// # Examples
///
/// ```
/// use lexigrid_cli::words::Level;
///
/// let level = Level::Medium;
/// assert_eq!(level.number(), 2);
/// assert_eq!(level.words().len(), level.word_count());
/// assert_eq!(level.unlock_score(), 100);
/// assert_eq!(level.next(), Some(Level::Hard));
/// assert_eq!(Level::Expert.next(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Level {
    /// Short everyday words.
    #[default]
    Easy,
    /// Five-letter words.
    Medium,
    /// Six- and seven-letter words.
    Hard,
    /// Long words.
    Expert,
}

impl Level {
    /// All levels in play order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the 1-based level number.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Expert => 4,
        }
    }

    /// Returns the lowercase difficulty name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    /// Looks up a level by its number.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.number() == number)
    }

    /// Returns the level after this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Returns how many words a puzzle at this level hides.
    #[must_use]
    #[expect(clippy::unused_self)]
    pub const fn word_count(self) -> usize {
        8
    }

    /// Returns the built-in words for this level, truncated to
    /// [`word_count`](Self::word_count).
    #[must_use]
    pub fn words(self) -> &'static [&'static str] {
        let all = match self {
            Self::Easy => EASY_WORDS,
            Self::Medium => MEDIUM_WORDS,
            Self::Hard => HARD_WORDS,
            Self::Expert => EXPERT_WORDS,
        };
        &all[..all.len().min(self.word_count())]
    }

    /// Returns the grid size used for this level when none is given.
    #[must_use]
    pub const fn grid_size(self) -> usize {
        match self {
            Self::Easy => 8,
            Self::Medium => 10,
            Self::Hard => 12,
            Self::Expert => 15,
        }
    }

    /// Returns the time allowed to finish a puzzle.
    #[must_use]
    pub const fn time_limit(self) -> Duration {
        match self {
            Self::Easy | Self::Medium => Duration::from_secs(180),
            Self::Hard | Self::Expert => Duration::from_secs(300),
        }
    }

    /// Returns the points listed for each word at this level.
    #[must_use]
    pub const fn points_per_word(self) -> u32 {
        self.number() * 10
    }

    /// Returns the total score needed to unlock this level.
    #[must_use]
    pub const fn unlock_score(self) -> u32 {
        (self.number() - 1) * 100
    }
}
