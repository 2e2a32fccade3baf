use super::{tournament, PopulationConfig};
use crate::{GeneticConfig, Individual, Knapsack};

use rand::Rng;

/// Auxiliary type for offspring generation.
/// Breeds a full generation of children from
/// the current one according to the specified configs.
pub(super) struct OffspringFactory<'a> {
    parents: &'a [Individual],
    knapsack: &'a Knapsack,
    genetic_config: &'a GeneticConfig,
    population_config: &'a PopulationConfig,
}

impl<'a> OffspringFactory<'a> {
    pub(super) fn new(
        parents: &'a [Individual],
        knapsack: &'a Knapsack,
        genetic_config: &'a GeneticConfig,
        population_config: &'a PopulationConfig,
    ) -> OffspringFactory<'a> {
        OffspringFactory {
            parents,
            knapsack,
            genetic_config,
            population_config,
        }
    }

    /// Generate a whole new generation.
    pub(super) fn generate_offspring<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Individual> {
        (0..self.population_config.size.get())
            .map(|_| self.breed(rng))
            .collect()
    }

    /// Select two parents by tournament and mate them.
    /// The child is then mutated and locally improved.
    fn breed<R: Rng + ?Sized>(&self, rng: &mut R) -> Individual {
        let tournament_size = self.population_config.tournament_size;
        let parent1 = tournament(self.parents, tournament_size, rng);
        let parent2 = tournament(self.parents, tournament_size, rng);

        let mut child = Individual::mate(parent1, parent2, self.knapsack, self.genetic_config);
        child.mutate(self.knapsack, self.genetic_config, rng);
        child.improve(self.knapsack);
        child
    }
}
