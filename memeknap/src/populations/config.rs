use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

// SAFETY: all of these literals are valid NonZeroUsizes.
const DEFAULT_SIZE: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(100) };
const DEFAULT_MAX_GENERATIONS: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(1000) };
const DEFAULT_TOURNAMENT_SIZE: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(5) };

/// Configuration data for population generation
/// and evolution.
///
/// Missing fields fall back to their [default] values
/// when deserializing.
///
/// [default]: PopulationConfig::default
///
/// # Examples
/// ```
/// use memeknap::PopulationConfig;
/// use std::num::NonZeroUsize;
///
/// let config = PopulationConfig {
///     // Specify some values here...
///     max_generations: NonZeroUsize::new(200).unwrap(),
///     // Default the rest...
///     ..PopulationConfig::default()
/// };
/// assert_eq!(config.size.get(), 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Size of the population.
    pub size: NonZeroUsize,
    /// Number of generations to evolve for.
    pub max_generations: NonZeroUsize,
    /// Number of individuals drawn (with replacement)
    /// for each parent selection tournament.
    pub tournament_size: NonZeroUsize,
}

impl Default for PopulationConfig {
    fn default() -> PopulationConfig {
        PopulationConfig {
            size: DEFAULT_SIZE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}
