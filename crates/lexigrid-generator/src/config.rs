use lexigrid_core::DirectionSet;

use crate::{CrossingPolicy, FillStrategy};

/// Default grid size (rows and columns).
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Largest accepted grid size.
pub const MAX_GRID_SIZE: usize = 64;

/// Default number of randomized attempts per word before it is abandoned.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Settings for [`PuzzleGenerator`](crate::PuzzleGenerator).
///
/// Construct with [`GeneratorConfig::new`] or [`Default`] and adjust with the
/// chained setters.
///
/// # Examples
///
/// ```
/// use lexigrid_core::DirectionSet;
/// use lexigrid_generator::{CrossingPolicy, FillStrategy, GeneratorConfig};
///
/// let config = GeneratorConfig::new(8)
///     .directions(DirectionSet::SIMPLE)
///     .crossing(CrossingPolicy::Forbid)
///     .fill(FillStrategy::Uniform)
///     .max_attempts(250);
/// assert!(config.validate().is_ok());
///
/// assert!(GeneratorConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of rows and columns of the grid.
    pub size: usize,
    /// Directions words may run in.
    pub directions: DirectionSet,
    /// Whether words may share cells with matching letters.
    pub crossing: CrossingPolicy,
    /// Randomized placement attempts per word.
    pub max_attempts: usize,
    /// How unfilled cells are completed.
    pub fill: FillStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl GeneratorConfig {
    /// Creates a configuration for a `size`×`size` grid with default settings.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            directions: DirectionSet::ALL,
            crossing: CrossingPolicy::Allow,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fill: FillStrategy::Weighted,
        }
    }

    /// Sets the grid size.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the allowed directions.
    #[must_use]
    pub const fn directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    /// Sets the crossing policy.
    #[must_use]
    pub const fn crossing(mut self, crossing: CrossingPolicy) -> Self {
        self.crossing = crossing;
        self
    }

    /// Sets the per-word attempt budget.
    #[must_use]
    pub const fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the fill strategy.
    #[must_use]
    pub const fn fill(mut self, fill: FillStrategy) -> Self {
        self.fill = fill;
        self
    }

    /// Checks that the configuration can produce a puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSize`] if `size` is zero or larger
    /// than [`MAX_GRID_SIZE`],
    /// [`GeneratorError::ZeroAttempts`] if `max_attempts` is zero, and
    /// [`GeneratorError::EmptyDirectionSet`] if no direction is allowed.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(1..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(GeneratorError::InvalidSize { size: self.size });
        }
        if self.max_attempts == 0 {
            return Err(GeneratorError::ZeroAttempts);
        }
        if self.directions.is_empty() {
            return Err(GeneratorError::EmptyDirectionSet);
        }
        Ok(())
    }
}

/// Error returned for a configuration that cannot produce a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The grid size was zero or above [`MAX_GRID_SIZE`].
    #[display("invalid grid size {size}: must be between 1 and {}", MAX_GRID_SIZE)]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// The attempt budget was zero.
    #[display("attempt budget must be at least 1")]
    ZeroAttempts,
    /// No placement direction was allowed.
    #[display("at least one placement direction is required")]
    EmptyDirectionSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.size, DEFAULT_GRID_SIZE);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.directions, DirectionSet::ALL);
        assert!(config.crossing.is_allow());
        assert!(config.fill.is_weighted());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unusable_settings() {
        assert_eq!(
            GeneratorConfig::new(0).validate(),
            Err(GeneratorError::InvalidSize { size: 0 })
        );
        assert_eq!(GeneratorConfig::new(MAX_GRID_SIZE).validate(), Ok(()));
        assert_eq!(
            GeneratorConfig::new(MAX_GRID_SIZE + 1).validate(),
            Err(GeneratorError::InvalidSize {
                size: MAX_GRID_SIZE + 1
            })
        );
        assert_eq!(
            GeneratorConfig::new(usize::MAX).validate(),
            Err(GeneratorError::InvalidSize { size: usize::MAX })
        );
        assert_eq!(
            GeneratorConfig::new(5).max_attempts(0).validate(),
            Err(GeneratorError::ZeroAttempts)
        );
        assert_eq!(
            GeneratorConfig::new(5)
                .directions(DirectionSet::empty())
                .validate(),
            Err(GeneratorError::EmptyDirectionSet)
        );
    }
}
