use super::ConfigError;

use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

// SAFETY: 100 is a valid NonZeroUsize.
const DEFAULT_ITEM_COUNT: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(100) };

/// Configuration data for problem generation
/// and individual-level operations.
///
/// Missing fields fall back to their [default] values
/// when deserializing, so partial configuration files
/// are accepted.
///
/// # Note
/// All quantities expressing probabilities or
/// fractions should be in the range [0.0, 1.0];
/// [`validate`] rejects anything else.
///
/// [default]: GeneticConfig::default
/// [`validate`]: GeneticConfig::validate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Weight limit of the knapsack.
    pub capacity: u32,
    /// Number of items generated for the knapsack,
    /// and therefore the length of every chromosome.
    pub item_count: NonZeroUsize,
    /// Inclusive bounds of the uniform item weight distribution.
    pub weight_bounds: (u32, u32),
    /// Inclusive bounds of the uniform item value distribution.
    pub value_bounds: (u32, u32),
    /// Chance that a child has two of its genes swapped.
    pub mutation_rate: f64,
    /// Fraction of the chromosome inherited from the first
    /// parent during crossover. The rest comes from the second.
    pub crossover_split: f64,
}

impl GeneticConfig {
    /// Checks that all values are usable.
    ///
    /// # Errors
    /// Returns the first problem found: a zero capacity,
    /// empty or zero-based item bounds, bounds whose totals
    /// over `item_count` items could overflow a `u32`, or a
    /// rate or fraction outside of [0.0, 1.0].
    ///
    /// # Examples
    /// ```
    /// use memeknap::{ConfigError, GeneticConfig};
    ///
    /// assert!(GeneticConfig::default().validate().is_ok());
    ///
    /// let config = GeneticConfig {
    ///     weight_bounds: (10, 5),
    ///     ..GeneticConfig::default()
    /// };
    /// assert!(matches!(
    ///     config.validate(),
    ///     Err(ConfigError::InvalidWeightBounds { min: 10, max: 5 })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let (min, max) = self.weight_bounds;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidWeightBounds { min, max });
        }
        let (min, max) = self.value_bounds;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidValueBounds { min, max });
        }
        self.check_total(self.weight_bounds.1)?;
        self.check_total(self.value_bounds.1)?;
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.crossover_split) {
            return Err(ConfigError::CrossoverSplitOutOfRange(self.crossover_split));
        }
        Ok(())
    }

    fn check_total(&self, max: u32) -> Result<(), ConfigError> {
        let item_count = self.item_count.get();
        u32::try_from(item_count)
            .ok()
            .and_then(|count| count.checked_mul(max))
            .map(|_| ())
            .ok_or(ConfigError::TotalOverflow { item_count, max })
    }

    /// Returns the index at which crossover switches
    /// from the first parent's genes to the second's,
    /// for chromosomes of length `item_count`.
    ///
    /// # Examples
    /// ```
    /// use memeknap::GeneticConfig;
    ///
    /// assert_eq!(GeneticConfig::default().split_point(100), 30);
    /// assert_eq!(GeneticConfig::default().split_point(5), 1);
    /// ```
    pub fn split_point(&self, item_count: usize) -> usize {
        (item_count as f64 * self.crossover_split) as usize
    }
}

impl Default for GeneticConfig {
    fn default() -> GeneticConfig {
        GeneticConfig {
            capacity: 250,
            item_count: DEFAULT_ITEM_COUNT,
            weight_bounds: (1, 25),
            value_bounds: (2, 30),
            mutation_rate: 0.05,
            crossover_split: 0.3,
        }
    }
}
