//! Genetic-algorithm approximation of the Traveling Salesman Problem.
//!
//! Given an N×N [`DistanceMatrix`], [`GaRunner`] evolves a population of
//! tours and returns the best closed cycle it finds. The search is
//! heuristic: it stops at an iteration cap or when the best cost stops
//! changing across a window of generations, with no optimality guarantee.
//!
//! - [`ga`]: the evolutionary loop and its operators
//! - [`tour`]: tour cost and population ranking
//! - [`matrix`]: validated distance matrix
//!
//! ```
//! use u_tsp_ga::{DistanceMatrix, GaConfig, GaRunner};
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0.0, 1.0, 1.0],
//!     vec![1.0, 0.0, 1.0],
//!     vec![1.0, 1.0, 0.0],
//! ]).unwrap();
//! let result = GaRunner::run(&matrix, &GaConfig::fast().with_seed(1)).unwrap();
//! assert_eq!(result.tour.len(), 4);
//! assert_eq!(result.cost, 3.0);
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see
//! per-generation progress.

pub mod error;
pub mod ga;
pub mod matrix;
pub mod tour;

pub use error::{Result, SolveError};
pub use ga::{GaConfig, GaResult, GaRunner, SolveStatus};
pub use matrix::DistanceMatrix;
