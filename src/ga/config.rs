//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Result, SolveError};

/// Configuration for the TSP genetic algorithm.
///
/// Controls population size, offspring volume, mutation probability and
/// the two termination conditions (iteration cap and convergence window).
///
/// # Defaults
///
/// ```
/// use u_tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_iterations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_offspring_count(150)
///     .with_mutation_percent(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours kept after each generation's ranking.
    ///
    /// Also the size of the initial random population.
    pub population_size: usize,

    /// Number of children generated per generation before ranking.
    ///
    /// Children are produced in pairs; an odd target drops the second
    /// child of the final pair.
    pub offspring_count: usize,

    /// Mutation probability as an integer percentage (0–100).
    ///
    /// A trigger is drawn uniformly from `0..=100`; the child mutates when
    /// the trigger is strictly below this value.
    pub mutation_percent: u32,

    /// Maximum number of generations.
    pub max_iterations: usize,

    /// Length of the best-cost window used for convergence detection.
    ///
    /// The run stops once the window is full and its oldest and newest
    /// entries are equal. A window of 1 stops after the first generation.
    pub fitness_window: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            offspring_count: 100,
            mutation_percent: 10,
            max_iterations: 500,
            fitness_window: 50,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of children generated per generation.
    pub fn with_offspring_count(mut self, n: usize) -> Self {
        self.offspring_count = n;
        self
    }

    /// Sets the mutation percentage, clamped to 100.
    pub fn with_mutation_percent(mut self, percent: u32) -> Self {
        self.mutation_percent = percent.min(100);
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the convergence window length.
    pub fn with_fitness_window(mut self, n: usize) -> Self {
        self.fitness_window = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small instances: small population, short window.
    ///
    /// - Population: 50, Offspring: 50, Iterations: 200, Window: 20
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            offspring_count: 50,
            max_iterations: 200,
            fitness_window: 20,
            ..Self::default()
        }
    }

    /// Preset balancing tour quality and run time.
    ///
    /// - Population: 100, Offspring: 100, Iterations: 500, Window: 50
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for large instances: large population, long window.
    ///
    /// - Population: 200, Offspring: 200, Iterations: 2000, Window: 100
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            offspring_count: 200,
            max_iterations: 2000,
            fitness_window: 100,
            ..Self::default()
        }
    }

    /// Selects a preset from the number of locations.
    ///
    /// - `n_locations < 20` → [`fast()`](Self::fast)
    /// - `20 ≤ n_locations < 100` → [`balanced()`](Self::balanced)
    /// - `n_locations ≥ 100` → [`quality()`](Self::quality)
    pub fn auto_select(n_locations: usize) -> Self {
        if n_locations < 20 {
            Self::fast()
        } else if n_locations < 100 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns [`SolveError::InvalidConfig`] if any parameter is out of
    /// range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SolveError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.offspring_count == 0 {
            return Err(SolveError::InvalidConfig(
                "offspring_count must be at least 1".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SolveError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.fitness_window == 0 {
            return Err(SolveError::InvalidConfig(
                "fitness_window must be at least 1".into(),
            ));
        }
        if self.mutation_percent > 100 {
            return Err(SolveError::InvalidConfig(format!(
                "mutation_percent must be within 0..=100, got {}",
                self.mutation_percent
            )));
        }
        Ok(())
    }
}
