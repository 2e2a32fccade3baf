//! A memetic algorithm for the 0/1 knapsack problem: a genetic
//! algorithm whose offspring are each passed through a greedy
//! local improvement step before joining the next generation.
//!
//! Individuals are inclusion flags over a fixed item catalog.
//! Each generation is bred by tournament selection, a fixed-point
//! crossover, a swap mutation and a single greedy repair pass, and
//! the best individual ever seen is tracked across generations.
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so
//! runs can be reproduced by seeding it.
//!
//! # Example usage: Evolving a random 100-item instance
//! ```
//! use memeknap::{Evolution, GeneticConfig, PopulationConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::num::NonZeroUsize;
//!
//! let genetic_config = GeneticConfig {
//!     capacity: 250,
//!     mutation_rate: 0.05,
//!     ..GeneticConfig::default()
//! };
//!
//! let population_config = PopulationConfig {
//!     size: NonZeroUsize::new(100).unwrap(),
//!     max_generations: NonZeroUsize::new(100).unwrap(),
//!     tournament_size: NonZeroUsize::new(5).unwrap(),
//! };
//!
//! let mut evolution = Evolution::new(
//!     genetic_config,
//!     population_config,
//!     StdRng::seed_from_u64(2024),
//! )
//! .unwrap();
//!
//! let best_fitness = evolution
//!     .run(|report| {
//!         println!("Iteration {}: Best fitness = {}", report.generation, report.best_fitness);
//!     })
//!     .fitness();
//! println!("Final Best Fitness: {}", best_fitness);
//!
//! let best = evolution.best().unwrap();
//! let knapsack = evolution.knapsack();
//! assert!(best.weight(knapsack) <= knapsack.capacity());
//! ```

mod evolution;
pub mod genomics;
pub mod populations;

pub use evolution::*;
pub use genomics::{ConfigError, GeneticConfig, Individual, Item, Knapsack};
pub use populations::{Population, PopulationConfig};
