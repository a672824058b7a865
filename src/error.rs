//! Error types.
//!
//! Every failure a solve can hit surfaces as one [`SolveError`] variant.
//! The solver performs no local recovery: an error aborts the run and no
//! partial tour is returned.

/// Errors raised while validating input or running the GA.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// The distance matrix is empty, not square, or holds non-finite entries.
    #[error("malformed distance matrix: {0}")]
    MalformedMatrix(String),

    /// A closed tour scored zero (or a non-finite value) during fitness
    /// weighting, so its inverse cost is undefined.
    #[error("degenerate tour cost {cost} for closed tour {tour:?}")]
    DegenerateCost { tour: Vec<usize>, cost: f64 },

    /// Crossover was asked to recombine genes of different lengths.
    #[error("gene length mismatch: {left} != {right}")]
    GeneLengthMismatch { left: usize, right: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SolveError>;
