use crate::populations::logging::EvolutionLogger;
use crate::{ConfigError, GeneticConfig, Individual, Knapsack, Population, PopulationConfig};

use log::{debug, info, trace};
use rand::Rng;

/// Every generation up to this one is reported.
const VERBOSE_GENERATIONS: usize = 20;
/// After [`VERBOSE_GENERATIONS`], only multiples of this are reported.
const REPORT_INTERVAL: usize = 20;

/// Progress of an evolution run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvolutionState {
    /// The knapsack and the initial population exist,
    /// but no generation has been bred yet.
    Initializing,
    /// The given generation has been bred, and more remain.
    Running { generation: usize },
    /// All configured generations have been bred.
    Terminated,
}

/// Summary of a single generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    /// Fitness of the best individual of this generation.
    pub champion_fitness: u32,
    /// Fitness of the best individual seen so far.
    pub best_fitness: u32,
    /// Whether the generation is one of those
    /// shown as progress.
    pub reported: bool,
}

/// Returns whether progress should be shown for `generation`:
/// each of the first 20 generations, then every 20th.
///
/// # Examples
/// ```
/// use memeknap::is_reported;
///
/// assert!(is_reported(1));
/// assert!(is_reported(20));
/// assert!(!is_reported(21));
/// assert!(is_reported(40));
/// ```
pub fn is_reported(generation: usize) -> bool {
    generation <= VERBOSE_GENERATIONS || generation % REPORT_INTERVAL == 0
}

/// Drives a memetic algorithm run on a single knapsack
/// instance for a fixed number of generations, keeping
/// track of the best individual ever bred.
///
/// # Examples
/// ```
/// use memeknap::{Evolution, GeneticConfig, PopulationConfig};
/// use rand::{rngs::StdRng, SeedableRng};
/// use std::num::NonZeroUsize;
///
/// let population_config = PopulationConfig {
///     max_generations: NonZeroUsize::new(50).unwrap(),
///     ..PopulationConfig::default()
/// };
/// let mut evolution = Evolution::new(
///     GeneticConfig::default(),
///     population_config,
///     StdRng::seed_from_u64(42),
/// )
/// .unwrap();
///
/// let best = evolution.run(|report| {
///     println!("Iteration {}: Best fitness = {}", report.generation, report.best_fitness);
/// });
/// println!("Final Best Fitness: {}", best.fitness());
/// ```
pub struct Evolution<R> {
    knapsack: Knapsack,
    population: Population,
    best: Option<Individual>,
    state: EvolutionState,
    logger: Option<EvolutionLogger>,
    rng: R,
}

impl<R: Rng> Evolution<R> {
    /// Generates a random knapsack from `genetic_config`
    /// and seeds the initial population.
    ///
    /// # Errors
    /// Returns an error if `genetic_config` fails [validation].
    ///
    /// [validation]: GeneticConfig::validate
    pub fn new(
        genetic_config: GeneticConfig,
        population_config: PopulationConfig,
        mut rng: R,
    ) -> Result<Evolution<R>, ConfigError> {
        genetic_config.validate()?;
        let knapsack = Knapsack::generate(&genetic_config, &mut rng);
        Evolution::with_knapsack(knapsack, genetic_config, population_config, rng)
    }

    /// Seeds the initial population for a given knapsack.
    /// The item-generation settings of `genetic_config`
    /// are ignored.
    ///
    /// # Errors
    /// Returns an error if `genetic_config` fails [validation],
    /// or if the knapsack does not have `item_count` items
    /// and the configured `capacity`.
    ///
    /// [validation]: GeneticConfig::validate
    pub fn with_knapsack(
        knapsack: Knapsack,
        genetic_config: GeneticConfig,
        population_config: PopulationConfig,
        mut rng: R,
    ) -> Result<Evolution<R>, ConfigError> {
        genetic_config.validate()?;
        if knapsack.len() != genetic_config.item_count.get() {
            return Err(ConfigError::ItemCountMismatch {
                expected: genetic_config.item_count.get(),
                found: knapsack.len(),
            });
        }
        if knapsack.capacity() != genetic_config.capacity {
            return Err(ConfigError::CapacityMismatch {
                expected: genetic_config.capacity,
                found: knapsack.capacity(),
            });
        }
        let population = Population::new(&knapsack, genetic_config, population_config, &mut rng);
        Ok(Evolution {
            knapsack,
            population,
            best: None,
            state: EvolutionState::Initializing,
            logger: None,
            rng,
        })
    }

    /// Records a snapshot of every bred generation in `logger`.
    pub fn with_logger(mut self, logger: EvolutionLogger) -> Evolution<R> {
        self.logger = Some(logger);
        self
    }

    /// Breeds the next generation and updates the best
    /// individual if the new generation's champion is
    /// strictly fitter.
    ///
    /// Returns `None` without doing anything once
    /// the run has terminated.
    pub fn step(&mut self) -> Option<GenerationReport> {
        if self.state == EvolutionState::Terminated {
            return None;
        }

        self.population.evolve(&self.knapsack, &mut self.rng);
        let generation = self.population.generation();
        let champion = self.population.champion();
        let champion_fitness = champion.fitness();

        let improved = self
            .best
            .as_ref()
            .map_or(true, |best| champion_fitness > best.fitness());
        if improved {
            debug!(
                "generation {}: best fitness improved to {}",
                generation, champion_fitness
            );
            self.best = Some(champion.clone());
        }
        let best_fitness = self.best_fitness().unwrap_or(champion_fitness);

        if let Some(logger) = &mut self.logger {
            logger.log(&self.population, &self.knapsack);
            if let Some(log) = logger.latest() {
                trace!("{}", log);
            }
        }

        self.state = if generation >= self.population.population_config().max_generations.get() {
            info!(
                "evolution terminated after {} generations with best fitness {}",
                generation, best_fitness
            );
            EvolutionState::Terminated
        } else {
            EvolutionState::Running { generation }
        };

        Some(GenerationReport {
            generation,
            champion_fitness,
            best_fitness,
            reported: is_reported(generation),
        })
    }

    /// Runs all remaining generations, handing every
    /// [reported] generation to `observer`, and returns
    /// the best individual found.
    ///
    /// [reported]: is_reported
    pub fn run<F>(&mut self, mut observer: F) -> &Individual
    where
        F: FnMut(&GenerationReport),
    {
        while let Some(report) = self.step() {
            if report.reported {
                observer(&report);
            }
        }
        self.best
            .as_ref()
            .expect("a terminated run has bred at least one generation")
    }
}

impl<R> Evolution<R> {
    /// Returns the problem instance being solved.
    pub fn knapsack(&self) -> &Knapsack {
        &self.knapsack
    }

    /// Returns the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Returns the best individual bred so far, if any.
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Returns the fitness of the best individual bred so far, if any.
    pub fn best_fitness(&self) -> Option<u32> {
        self.best.as_ref().map(Individual::fitness)
    }

    /// Returns the current state of the run.
    pub fn state(&self) -> EvolutionState {
        self.state
    }

    /// Returns the attached logger, if any.
    pub fn logger(&self) -> Option<&EvolutionLogger> {
        self.logger.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::populations::logging::ReportingLevel;
    use crate::Item;
    use rand::{rngs::StdRng, SeedableRng};
    use std::num::NonZeroUsize;

    fn small_configs(generations: usize) -> (GeneticConfig, PopulationConfig) {
        (
            GeneticConfig {
                item_count: NonZeroUsize::new(40).unwrap(),
                capacity: 100,
                ..GeneticConfig::default()
            },
            PopulationConfig {
                size: NonZeroUsize::new(30).unwrap(),
                max_generations: NonZeroUsize::new(generations).unwrap(),
                ..PopulationConfig::default()
            },
        )
    }

    #[test]
    fn reporting_schedule() {
        let reported: Vec<usize> = (1..=100).filter(|&g| is_reported(g)).collect();
        let mut expected: Vec<usize> = (1..=20).collect();
        expected.extend([40, 60, 80, 100]);
        assert_eq!(reported, expected);
    }

    #[test]
    fn rejects_invalid_config() {
        let (mut genetic_config, population_config) = small_configs(10);
        genetic_config.capacity = 0;
        assert!(matches!(
            Evolution::new(genetic_config, population_config, StdRng::seed_from_u64(0)),
            Err(ConfigError::ZeroCapacity)
        ));
    }

    #[test]
    fn rejects_mismatched_knapsack() {
        let (genetic_config, population_config) = small_configs(10);
        let knapsack = Knapsack::new(vec![Item::new(1, 1); 3], 10);
        assert!(matches!(
            Evolution::with_knapsack(
                knapsack,
                genetic_config,
                population_config,
                StdRng::seed_from_u64(0)
            ),
            Err(ConfigError::ItemCountMismatch {
                expected: 40,
                found: 3
            })
        ));
    }

    #[test]
    fn state_transitions() {
        let (genetic_config, population_config) = small_configs(3);
        let mut evolution =
            Evolution::new(genetic_config, population_config, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(evolution.state(), EvolutionState::Initializing);
        assert!(evolution.best().is_none());

        assert_eq!(evolution.step().unwrap().generation, 1);
        assert_eq!(evolution.state(), EvolutionState::Running { generation: 1 });
        assert_eq!(evolution.step().unwrap().generation, 2);
        assert_eq!(evolution.state(), EvolutionState::Running { generation: 2 });
        assert_eq!(evolution.step().unwrap().generation, 3);
        assert_eq!(evolution.state(), EvolutionState::Terminated);

        assert!(evolution.step().is_none());
        assert_eq!(evolution.population().generation(), 3);
    }

    #[test]
    fn best_fitness_never_decreases() {
        let (genetic_config, population_config) = small_configs(60);
        let mut evolution =
            Evolution::new(genetic_config, population_config, StdRng::seed_from_u64(2)).unwrap();

        let mut previous = 0;
        while let Some(report) = evolution.step() {
            assert!(report.best_fitness >= previous);
            assert!(report.best_fitness >= report.champion_fitness);
            assert_eq!(Some(report.best_fitness), evolution.best_fitness());
            previous = report.best_fitness;
        }

        let best = evolution.best().unwrap();
        assert_eq!(best.fitness(), evolution.knapsack().evaluate(best.chromosome()));
        assert!(best.fitness() <= evolution.knapsack().max_value());
        assert!(best.weight(evolution.knapsack()) <= evolution.knapsack().capacity());
    }

    #[test]
    fn run_reports_schedule() {
        let (genetic_config, population_config) = small_configs(45);
        let mut evolution =
            Evolution::new(genetic_config, population_config, StdRng::seed_from_u64(3)).unwrap();

        let mut generations = vec![];
        let final_fitness = evolution
            .run(|report| generations.push((report.generation, report.best_fitness)))
            .fitness();

        let mut expected: Vec<usize> = (1..=20).collect();
        expected.extend([40]);
        assert_eq!(
            generations.iter().map(|(g, _)| *g).collect::<Vec<_>>(),
            expected
        );
        assert!(generations.iter().all(|(_, f)| *f <= final_fitness));
        assert_eq!(evolution.state(), EvolutionState::Terminated);
    }

    #[test]
    fn runs_are_reproducible() {
        let run = |seed| {
            let (genetic_config, population_config) = small_configs(25);
            let mut evolution =
                Evolution::new(genetic_config, population_config, StdRng::seed_from_u64(seed))
                    .unwrap();
            let mut fitnesses = vec![];
            evolution.run(|report| fitnesses.push(report.best_fitness));
            fitnesses
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn logger_records_every_generation() {
        let (genetic_config, population_config) = small_configs(5);
        let mut evolution =
            Evolution::new(genetic_config, population_config, StdRng::seed_from_u64(4))
                .unwrap()
                .with_logger(EvolutionLogger::new(ReportingLevel::NoIndividuals));
        evolution.run(|_| {});

        let logger = evolution.logger().unwrap();
        assert_eq!(
            logger.iter().map(|l| l.generation_number).collect::<Vec<_>>(),
            [1, 2, 3, 4, 5]
        );
        assert!(logger.iter().all(|l| l.champion.is_none()));
        assert!(logger.iter().all(|l| l.fitness_stats.maximum > 0));

        // Repaired individuals are never empty, so only
        // overweight ones score zero.
        let latest = logger.latest().unwrap();
        let population = evolution.population();
        assert_eq!(
            latest.feasible_count,
            population.individuals().filter(|i| i.fitness() > 0).count()
        );
        assert_eq!(
            latest.feasible_count,
            population
                .individuals()
                .filter(|i| evolution.knapsack().fits(i.chromosome()))
                .count()
        );
        assert_eq!(
            latest.fitness_stats.maximum,
            population.champion().fitness()
        );
    }

    #[test]
    fn rejects_bounds_with_overflowing_totals() {
        let (mut genetic_config, population_config) = small_configs(5);
        genetic_config.value_bounds = (2, u32::MAX);
        assert!(matches!(
            Evolution::new(genetic_config, population_config, StdRng::seed_from_u64(0)),
            Err(ConfigError::TotalOverflow {
                item_count: 40,
                max: u32::MAX
            })
        ));
    }

    #[test]
    fn evolves_with_extreme_bounds() {
        let (mut genetic_config, population_config) = small_configs(10);
        genetic_config.capacity = u32::MAX;
        genetic_config.weight_bounds = (1, u32::MAX / 40);
        genetic_config.value_bounds = (1, u32::MAX / 40);
        let mut evolution =
            Evolution::new(genetic_config, population_config, StdRng::seed_from_u64(6)).unwrap();

        let best = evolution.run(|_| {}).clone();
        let knapsack = evolution.knapsack();
        // Everything fits, so a single repair pass selects every item.
        assert!(best.chromosome().iter().all(|&included| included));
        assert_eq!(best.fitness(), knapsack.max_value());
    }

    #[test]
    fn rejects_knapsack_with_other_capacity() {
        let (genetic_config, population_config) = small_configs(10);
        let knapsack = Knapsack::new(vec![Item::new(1, 1); 40], 60);
        assert!(matches!(
            Evolution::with_knapsack(
                knapsack,
                genetic_config,
                population_config,
                StdRng::seed_from_u64(0)
            ),
            Err(ConfigError::CapacityMismatch {
                expected: 100,
                found: 60
            })
        ));
    }

    #[test]
    fn solves_small_instance_optimally() {
        // Optimum: items 1 and 2, weight 50, value 220.
        let knapsack = Knapsack::new(
            vec![
                Item::new(10, 60),
                Item::new(20, 100),
                Item::new(30, 120),
                Item::new(5, 10),
                Item::new(15, 50),
            ],
            50,
        );
        let genetic_config = GeneticConfig {
            item_count: NonZeroUsize::new(5).unwrap(),
            capacity: 50,
            ..GeneticConfig::default()
        };
        let population_config = PopulationConfig {
            size: NonZeroUsize::new(20).unwrap(),
            max_generations: NonZeroUsize::new(30).unwrap(),
            ..PopulationConfig::default()
        };
        let mut evolution = Evolution::with_knapsack(
            knapsack,
            genetic_config,
            population_config,
            StdRng::seed_from_u64(5),
        )
        .unwrap();

        assert_eq!(evolution.run(|_| {}).fitness(), 220);
    }
}
