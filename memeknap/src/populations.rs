//! A Population is a fixed-size collection of individuals,
//! replaced wholesale by their offspring every generation.
mod config;
pub mod logging;
mod offspring_factory;
mod selection;

use crate::{GeneticConfig, Individual, Knapsack};
pub use config::PopulationConfig;
use offspring_factory::OffspringFactory;
pub use selection::tournament;

use rand::Rng;

/// A population of individuals.
#[derive(Clone, Debug)]
pub struct Population {
    individuals: Vec<Individual>,
    generation: usize,
    population_config: PopulationConfig,
    genetic_config: GeneticConfig,
}

impl Population {
    /// Creates a new population of single-item seed
    /// individuals for `knapsack`.
    ///
    /// # Examples
    /// ```
    /// use memeknap::{GeneticConfig, Knapsack, Population, PopulationConfig};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let genetic_config = GeneticConfig::default();
    /// let knapsack = Knapsack::generate(&genetic_config, &mut rng);
    ///
    /// let population = Population::new(
    ///     &knapsack,
    ///     genetic_config,
    ///     PopulationConfig::default(),
    ///     &mut rng,
    /// );
    ///
    /// assert_eq!(population.individuals().count(), 100);
    /// assert!(population.individuals().all(|i| i.selected().count() == 1));
    /// assert_eq!(population.generation(), 0);
    /// ```
    pub fn new<R: Rng + ?Sized>(
        knapsack: &Knapsack,
        genetic_config: GeneticConfig,
        population_config: PopulationConfig,
        rng: &mut R,
    ) -> Population {
        Population {
            individuals: (0..population_config.size.get())
                .map(|_| Individual::seed(knapsack, rng))
                .collect(),
            generation: 0,
            population_config,
            genetic_config,
        }
    }

    /// Replaces the population with a new generation,
    /// bred by tournament selection, crossover, mutation
    /// and local improvement.
    pub fn evolve<R: Rng + ?Sized>(&mut self, knapsack: &Knapsack, rng: &mut R) {
        self.individuals = OffspringFactory::new(
            &self.individuals,
            knapsack,
            &self.genetic_config,
            &self.population_config,
        )
        .generate_offspring(rng);
        self.generation += 1;
    }

    /// Returns the currently best-performing individual.
    /// If several share the best fitness, the first one is returned.
    pub fn champion(&self) -> &Individual {
        self.individuals
            .iter()
            .reduce(|best, i| if i.fitness() > best.fitness() { i } else { best })
            .expect("empty population has no champion")
    }

    /// Returns an iterator over all current individuals.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Returns the number of generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the population's configuration.
    pub fn population_config(&self) -> &PopulationConfig {
        &self.population_config
    }

    /// Returns the configuration used for individual-level operations.
    pub fn genetic_config(&self) -> &GeneticConfig {
        &self.genetic_config
    }
}
