//! Individuals are the focus of evolution.
//! Each one is a chromosome of inclusion flags over the
//! items of a [`Knapsack`], together with its cached fitness.
//! Individuals can be mated, mutated and locally improved,
//! and their fitness is kept up to date by every such operation.

mod config;
mod errors;
mod individual;
mod knapsack;
mod local_search;

pub use config::GeneticConfig;
pub use errors::ConfigError;
pub use individual::Individual;
pub use knapsack::{Item, Knapsack};
