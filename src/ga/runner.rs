//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → ranking → repeat,
//! until the best-cost window plateaus or the iteration cap is reached.

use rand::Rng;
use tracing::{debug, info, instrument, warn};
use u_numflow::random::create_rng;

use super::config::GaConfig;
use super::convergence::FitnessHistory;
use super::operators::{cut_crossover, random_population, swap_mutation};
use super::selection::CumulativeDistribution;
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::tour::{close_tour, closed_tour_cost, rank_and_truncate};

/// Lifecycle of a single solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    NotStarted,
    Running,
    /// The best-cost window filled up with equal endpoints.
    Converged,
    /// `max_iterations` generations ran without converging.
    IterationCapReached,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best tour closed into a cycle (first location repeated at the end).
    pub tour: Vec<usize>,

    /// Cost of `tour`.
    pub cost: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Why the loop stopped.
    pub status: SolveStatus,

    /// Best cost at the end of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// The runner holds no state: every call builds its own population,
/// window and generation counter, so repeated calls never interfere.
///
/// # Usage
///
/// ```
/// use u_tsp_ga::{DistanceMatrix, GaConfig, GaRunner};
///
/// let matrix = DistanceMatrix::from_points(&[
///     (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0),
/// ]).unwrap();
/// let config = GaConfig::fast().with_seed(42);
/// let tour = GaRunner::solve(&matrix, &config).unwrap();
/// assert_eq!(tour.len(), 5);
/// assert_eq!(tour.first(), tour.last());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Solves and returns only the closed tour.
    pub fn solve(matrix: &DistanceMatrix, config: &GaConfig) -> Result<Vec<usize>> {
        Self::run(matrix, config).map(|result| result.tour)
    }

    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// Any [`SolveError`](crate::SolveError) from validation or from a
    /// generation aborts the run; no partial result is returned.
    #[instrument(level = "debug", skip_all, fields(locations = matrix.dimension()))]
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;
        if config.fitness_window == 1 {
            warn!("fitness_window is 1; the run will stop after the first generation");
        }

        let mut ctx = SolveContext::new(matrix, config);
        ctx.initialize(rng)?;
        while ctx.status == SolveStatus::Running {
            ctx.step(rng)?;
        }
        Ok(ctx.finish())
    }
}

/// Per-call state of one solve.
struct SolveContext<'a> {
    matrix: &'a DistanceMatrix,
    config: &'a GaConfig,
    population: Vec<Vec<usize>>,
    window: FitnessHistory,
    fitness_history: Vec<f64>,
    generation: usize,
    status: SolveStatus,
}

impl<'a> SolveContext<'a> {
    fn new(matrix: &'a DistanceMatrix, config: &'a GaConfig) -> Self {
        Self {
            matrix,
            config,
            population: Vec::new(),
            window: FitnessHistory::new(config.fitness_window),
            fitness_history: Vec::new(),
            generation: 0,
            status: SolveStatus::NotStarted,
        }
    }

    fn initialize<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.population =
            random_population(self.matrix.dimension(), self.config.population_size, rng)?;
        self.status = SolveStatus::Running;
        Ok(())
    }

    /// Runs one generation and updates `status`.
    fn step<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let offspring = self.breed(rng)?;

        let mut combined = std::mem::take(&mut self.population);
        combined.extend(offspring);
        self.population =
            rank_and_truncate(combined, self.matrix, self.config.population_size, true);

        let best_cost = closed_tour_cost(&self.population[0], self.matrix);
        self.window.push(best_cost);
        self.fitness_history.push(best_cost);
        self.generation += 1;
        debug!(generation = self.generation, best_cost, "generation complete");

        if self.window.is_converged() {
            info!(
                generation = self.generation,
                best_cost, "best cost plateaued, stopping"
            );
            self.status = SolveStatus::Converged;
        } else if self.generation >= self.config.max_iterations {
            info!(
                generation = self.generation,
                best_cost, "iteration cap reached"
            );
            self.status = SolveStatus::IterationCapReached;
        }
        Ok(())
    }

    /// Produces exactly `offspring_count` mutated children of the current
    /// population.
    fn breed<R: Rng>(&self, rng: &mut R) -> Result<Vec<Vec<usize>>> {
        let distribution = CumulativeDistribution::from_population(&self.population, self.matrix)?;
        let target = self.config.offspring_count;
        let percent = self.config.mutation_percent;

        let mut offspring = Vec::with_capacity(target);
        while offspring.len() < target {
            let (i, j) = distribution.draw_pair(rng);
            let (a, b) = cut_crossover(&self.population[i], &self.population[j], rng)?;
            offspring.push(swap_mutation(&a, percent, rng));
            if offspring.len() < target {
                offspring.push(swap_mutation(&b, percent, rng));
            }
        }
        Ok(offspring)
    }

    fn finish(self) -> GaResult {
        let best = &self.population[0];
        GaResult {
            tour: close_tour(best),
            cost: closed_tour_cost(best, self.matrix),
            generations: self.generation,
            status: self.status,
            fitness_history: self.fitness_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
