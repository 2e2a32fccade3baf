use memeknap::populations::logging::{EvolutionLogger, ReportingLevel};
use memeknap::{ConfigError, Evolution, GeneticConfig, PopulationConfig};

use log::{debug, info, log_enabled, Level};
use rand::{rngs::StdRng, SeedableRng};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Everything needed to reproduce a run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RunConfig {
    genetic: GeneticConfig,
    population: PopulationConfig,
    /// RNG seed. Drawn from entropy if absent.
    seed: Option<u64>,
}

enum Command {
    PrintExample,
    Run {
        config_path: Option<PathBuf>,
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::init();

    let result = parse_args(std::env::args().skip(1)).and_then(|command| match command {
        Command::PrintExample => print_example_config(),
        Command::Run { config_path, seed } => run(config_path, seed),
    });
    if let Err(e) = result {
        eprintln!("{}", e);
        eprintln!("Usage: knapsack [CONFIG.ron] [--seed N] | knapsack --example");
        std::process::exit(1);
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, Box<dyn Error>> {
    let mut config_path = None;
    let mut seed = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--example" => return Ok(Command::PrintExample),
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                seed = Some(value.parse()?);
            }
            path => config_path = Some(PathBuf::from(path)),
        }
    }
    Ok(Command::Run { config_path, seed })
}

fn print_example_config() -> Result<(), Box<dyn Error>> {
    println!(
        "{}",
        ron::ser::to_string_pretty(&RunConfig::default(), PrettyConfig::new())?
    );
    Ok(())
}

fn load_config(config_path: Option<PathBuf>) -> Result<RunConfig, Box<dyn Error>> {
    match config_path {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| format!("error reading {}: {}", path.display(), e))?;
            let config = ron::from_str(&text)
                .map_err(|e| format!("error parsing {}: {}", path.display(), e))?;
            Ok(config)
        }
        None => Ok(RunConfig::default()),
    }
}

/// Generation snapshots are only kept when they will be traced.
fn build_evolution(
    config: RunConfig,
    seed: u64,
    snapshots: bool,
) -> Result<Evolution<StdRng>, ConfigError> {
    let evolution = Evolution::new(
        config.genetic,
        config.population,
        StdRng::seed_from_u64(seed),
    )?;
    Ok(if snapshots {
        evolution.with_logger(EvolutionLogger::new(ReportingLevel::NoIndividuals))
    } else {
        evolution
    })
}

fn run(config_path: Option<PathBuf>, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let config = load_config(config_path)?;
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    info!("seeding run with {}", seed);

    let mut evolution = build_evolution(config, seed, log_enabled!(Level::Trace))?;
    debug!("knapsack: {}", ron::to_string(evolution.knapsack())?);

    let best = evolution.run(|report| {
        println!(
            "Iteration {}: Best fitness = {}",
            report.generation, report.best_fitness
        );
    });
    println!("Final Best Fitness: {}", best.fitness());
    debug!("best individual: {}", best);

    Ok(())
}
