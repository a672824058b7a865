//! Genetic Algorithm for the Traveling Salesman Problem.
//!
//! Tours are permutations of location indices. Each generation draws
//! parent pairs by inverse-cost roulette, recombines them with a single
//! cut crossover, applies swap mutation, and keeps the best
//! `population_size` tours of parents and children together.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, offspring, mutation, stop rules)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best closed tour with run statistics
//! - [`FitnessHistory`]: Convergence window over per-generation best costs
//! - [`CumulativeDistribution`]: Roulette wheel over a ranked population
//!
//! # Submodules
//!
//! - [`operators`]: Random tours, cut crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
mod convergence;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use convergence::FitnessHistory;
pub use runner::{GaResult, GaRunner, SolveStatus};
pub use selection::CumulativeDistribution;
