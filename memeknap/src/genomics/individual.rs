use super::{GeneticConfig, Knapsack};

use rand::Rng;

use std::fmt;

/// A candidate solution: one inclusion flag per item,
/// and the fitness those flags evaluate to.
///
/// The fitness is recomputed by every operation that
/// creates or changes the chromosome, so it is never stale.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Individual {
    chromosome: Vec<bool>,
    fitness: u32,
}

impl Individual {
    /// Creates an individual from an explicit chromosome,
    /// evaluating it against `knapsack`.
    ///
    /// # Panics
    /// Panics if the chromosome's length differs from
    /// the number of items in the knapsack.
    ///
    /// # Examples
    /// ```
    /// use memeknap::{Individual, Item, Knapsack};
    ///
    /// let knapsack = Knapsack::new(vec![Item::new(10, 60), Item::new(20, 100)], 25);
    /// let individual = Individual::new(vec![false, true], &knapsack);
    ///
    /// assert_eq!(individual.fitness(), 100);
    /// ```
    pub fn new(chromosome: Vec<bool>, knapsack: &Knapsack) -> Individual {
        let fitness = knapsack.evaluate(&chromosome);
        Individual {
            chromosome,
            fitness,
        }
    }

    /// Creates a seed individual containing exactly one
    /// item, chosen uniformly at random.
    ///
    /// # Examples
    /// ```
    /// use memeknap::{GeneticConfig, Individual, Knapsack};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let knapsack = Knapsack::generate(&GeneticConfig::default(), &mut rng);
    /// let seed = Individual::seed(&knapsack, &mut rng);
    ///
    /// assert_eq!(seed.selected().count(), 1);
    /// ```
    pub fn seed<R: Rng + ?Sized>(knapsack: &Knapsack, rng: &mut R) -> Individual {
        let mut chromosome = vec![false; knapsack.len()];
        chromosome[rng.gen_range(0..knapsack.len())] = true;
        Individual::new(chromosome, knapsack)
    }

    /// Combines two individuals and returns a child.
    ///
    /// The child copies the genes of `parent1` up to the
    /// configured [split point], and those of `parent2`
    /// from there on. No randomness is involved.
    ///
    /// [split point]: GeneticConfig::split_point
    ///
    /// # Examples
    /// ```
    /// use memeknap::{GeneticConfig, Individual, Item, Knapsack};
    ///
    /// let knapsack = Knapsack::new(vec![Item::new(1, 1); 10], 10);
    /// let config = GeneticConfig::default();
    ///
    /// let full = Individual::new(vec![true; 10], &knapsack);
    /// let empty = Individual::new(vec![false; 10], &knapsack);
    /// let child = Individual::mate(&full, &empty, &knapsack, &config);
    ///
    /// assert_eq!(
    ///     child.chromosome(),
    ///     &[true, true, true, false, false, false, false, false, false, false]
    /// );
    /// assert_eq!(child.fitness(), 3);
    /// ```
    pub fn mate(
        parent1: &Individual,
        parent2: &Individual,
        knapsack: &Knapsack,
        config: &GeneticConfig,
    ) -> Individual {
        assert_eq!(
            parent1.chromosome.len(),
            parent2.chromosome.len(),
            "parents have chromosomes of different lengths"
        );
        let split = config.split_point(parent1.chromosome.len());
        let chromosome = parent1.chromosome[..split]
            .iter()
            .chain(&parent2.chromosome[split..])
            .copied()
            .collect();
        Individual::new(chromosome, knapsack)
    }

    /// Has a [chance] of swapping the genes at two random
    /// positions (possibly the same one). The number of
    /// selected items is therefore unchanged.
    ///
    /// Fitness is recomputed whether or not the swap happens.
    ///
    /// [chance]: GeneticConfig::mutation_rate
    pub fn mutate<R: Rng + ?Sized>(
        &mut self,
        knapsack: &Knapsack,
        config: &GeneticConfig,
        rng: &mut R,
    ) {
        if rng.gen::<f64>() < config.mutation_rate {
            let len = self.chromosome.len();
            let first = rng.gen_range(0..len);
            let second = rng.gen_range(0..len);
            self.chromosome.swap(first, second);
        }
        self.reevaluate(knapsack);
    }

    /// Greedily repairs and improves the individual in a
    /// single forward pass over the items, then recomputes
    /// its fitness.
    ///
    /// Excluded items that still fit are added. Each included
    /// item is swapped for the first excluded item with a strictly
    /// higher value that keeps the knapsack within capacity.
    /// Items are visited once; the result is not necessarily
    /// a local optimum.
    ///
    /// # Examples
    /// ```
    /// use memeknap::{Individual, Item, Knapsack};
    ///
    /// let knapsack = Knapsack::new(
    ///     vec![
    ///         Item::new(10, 60),
    ///         Item::new(20, 100),
    ///         Item::new(30, 120),
    ///         Item::new(5, 10),
    ///         Item::new(15, 50),
    ///     ],
    ///     50,
    /// );
    /// let mut individual = Individual::new(vec![false; 5], &knapsack);
    /// individual.improve(&knapsack);
    ///
    /// assert_eq!(individual.chromosome(), &[true, true, false, true, true]);
    /// assert_eq!(individual.weight(&knapsack), 50);
    /// assert_eq!(individual.fitness(), 220);
    /// ```
    pub fn improve(&mut self, knapsack: &Knapsack) {
        super::local_search::greedy_pass(&mut self.chromosome, knapsack);
        self.reevaluate(knapsack);
    }

    /// Returns the individual's inclusion flags, indexed by item.
    pub fn chromosome(&self) -> &[bool] {
        &self.chromosome
    }

    /// Returns the indices of the selected items.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.chromosome
            .iter()
            .enumerate()
            .filter_map(|(i, &included)| included.then(|| i))
    }

    /// Returns the individual's fitness.
    pub fn fitness(&self) -> u32 {
        self.fitness
    }

    /// Returns the total weight of the selected items.
    pub fn weight(&self, knapsack: &Knapsack) -> u32 {
        knapsack.weight_of(&self.chromosome)
    }

    fn reevaluate(&mut self, knapsack: &Knapsack) {
        self.fitness = knapsack.evaluate(&self.chromosome);
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Individual")
            .field("Items", &self.selected().collect::<Vec<_>>())
            .field("Fitness", &self.fitness)
            .finish()
    }
}
