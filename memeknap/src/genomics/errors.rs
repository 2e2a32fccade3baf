/// An error type indicating an unusable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The knapsack cannot hold anything.
    #[error("knapsack capacity must be non-zero")]
    ZeroCapacity,
    /// Item weights must be drawn from a non-empty range of positive numbers.
    #[error("invalid item weight bounds [{min}, {max}]")]
    InvalidWeightBounds { min: u32, max: u32 },
    /// Item values must be drawn from a non-empty range of positive numbers.
    #[error("invalid item value bounds [{min}, {max}]")]
    InvalidValueBounds { min: u32, max: u32 },
    /// The mutation rate is not a probability.
    #[error("mutation rate {0} is not in [0, 1]")]
    MutationRateOutOfRange(f64),
    /// The crossover split is not a fraction of the chromosome.
    #[error("crossover split {0} is not in [0, 1]")]
    CrossoverSplitOutOfRange(f64),
    /// The summed weights or values of `item_count` items
    /// drawn up to `max` could exceed `u32::MAX`.
    #[error("{item_count} items of up to {max} overflow a 32-bit total")]
    TotalOverflow { item_count: usize, max: u32 },
    /// A supplied knapsack does not have the configured number of items.
    #[error("expected a knapsack with {expected} items, found {found}")]
    ItemCountMismatch { expected: usize, found: usize },
    /// A supplied knapsack does not have the configured capacity.
    #[error("expected a knapsack with capacity {expected}, found {found}")]
    CapacityMismatch { expected: u32, found: u32 },
}
