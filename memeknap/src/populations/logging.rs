use super::Population;
use crate::{Individual, Knapsack};

use std::fmt;

/// Defines different possible reporting levels for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    /// Clones the population champion.
    PopulationChampion,
    /// Clones no individuals, only statistics are kept.
    NoIndividuals,
}

/// A snapshot of a population.
#[derive(Clone, Debug)]
pub struct Log {
    pub generation_number: usize,
    pub champion: Option<Individual>,
    pub fitness_stats: Stats,
    /// Number of individuals within capacity.
    pub feasible_count: usize,
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Log {{\n\
            \tgeneration_number: {:?}\n\
            \tfeasible_count: {:?}\n\
            \tfitness: {:?}\n\
            }}",
            &self.generation_number, &self.feasible_count, &self.fitness_stats,
        )
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: u32,
    pub minimum: u32,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about numbers in a sequence,
    /// or `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// use memeknap::populations::logging::Stats;
    ///
    /// let stats = Stats::from([4, 1, 7, 2].iter().copied()).unwrap();
    /// assert_eq!(stats.maximum, 7);
    /// assert_eq!(stats.minimum, 1);
    /// assert_eq!(stats.mean, 3.5);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn from(data: impl Iterator<Item = u32>) -> Option<Stats> {
        let mut data: Vec<u32> = data.collect();
        if data.is_empty() {
            return None;
        }
        data.sort_unstable();
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] as f64 + data[mid] as f64) / 2.0
        } else {
            data[mid] as f64
        };
        Some(Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().map(|&d| d as f64).sum::<f64>() / data.len() as f64,
            median,
        })
    }
}

/// A log of the evolution of a population over time.
#[derive(Clone, Debug)]
pub struct EvolutionLogger {
    reporting_level: ReportingLevel,
    logs: Vec<Log>,
}

impl EvolutionLogger {
    /// Returns a logger with the appropiate reporting level.
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger {
        EvolutionLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Store a snapshot of a population.
    ///
    /// # Examples
    /// ```
    /// use memeknap::{GeneticConfig, Knapsack, Population, PopulationConfig};
    /// use memeknap::populations::logging::{EvolutionLogger, ReportingLevel};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let knapsack = Knapsack::generate(&GeneticConfig::default(), &mut rng);
    /// let population = Population::new(
    ///     &knapsack,
    ///     GeneticConfig::default(),
    ///     PopulationConfig::default(),
    ///     &mut rng,
    /// );
    ///
    /// let mut logger = EvolutionLogger::new(ReportingLevel::PopulationChampion);
    /// logger.log(&population, &knapsack);
    ///
    /// let log = logger.iter().next().unwrap();
    /// assert_eq!(log.generation_number, 0);
    /// assert_eq!(log.feasible_count, 100);
    /// assert_eq!(log.champion.as_ref(), Some(population.champion()));
    /// ```
    pub fn log(&mut self, population: &Population, knapsack: &Knapsack) {
        let fitness_stats = Stats::from(population.individuals().map(Individual::fitness))
            .expect("empty population has no statistics");
        self.logs.push(Log {
            generation_number: population.generation(),
            champion: match self.reporting_level {
                ReportingLevel::PopulationChampion => Some(population.champion().clone()),
                ReportingLevel::NoIndividuals => None,
            },
            fitness_stats,
            feasible_count: population
                .individuals()
                .filter(|i| knapsack.fits(i.chromosome()))
                .count(),
        })
    }

    /// Iterate over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &Log> {
        self.logs.iter()
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> Option<&Log> {
        self.logs.last()
    }
}
