//! Permutation operators for tour chromosomes.
//!
//! Every operator takes the random source explicitly, so each one can be
//! driven by a seeded generator in isolation.
//!
//! # Initialization
//!
//! - [`random_tour`]: one uniform random permutation of `0..n`
//! - [`random_population`]: `count` independent random tours
//!
//! # Crossover
//!
//! - [`cut_crossover`]: single cut point; the prefix is kept from one
//!   parent and the remaining locations follow the other parent's order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: with a given percentage, exchange two distinct
//!   positions in a copy of the tour

use std::collections::HashSet;

use rand::Rng;
use u_numflow::random::shuffle;

use crate::error::{Result, SolveError};

// ============================================================================
// Initialization
// ============================================================================

/// Returns a uniform random permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    shuffle(&mut tour, rng);
    tour
}

/// Generates `count` independent random tours over `n` locations.
///
/// Tours are not deduplicated.
///
/// # Errors
/// [`SolveError::InvalidConfig`] if `n` or `count` is zero.
pub fn random_population<R: Rng>(n: usize, count: usize, rng: &mut R) -> Result<Vec<Vec<usize>>> {
    if n == 0 {
        return Err(SolveError::InvalidConfig(
            "tour length must be at least 1".into(),
        ));
    }
    if count == 0 {
        return Err(SolveError::InvalidConfig(
            "population size must be at least 1".into(),
        ));
    }
    Ok((0..count).map(|_| random_tour(n, rng)).collect())
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-cut order-preserving crossover.
///
/// Draws a cut `c` uniformly in `[0, len)` and builds two children with
/// [`cut_crossover_at`]. Both children are permutations of the parents'
/// value set.
///
/// # Errors
/// [`SolveError::GeneLengthMismatch`] if the parents differ in length.
pub fn cut_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if parent1.len() != parent2.len() {
        return Err(SolveError::GeneLengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        });
    }
    if parent1.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }
    let cut = rng.random_range(0..parent1.len());
    cut_crossover_at(parent1, parent2, cut)
}

/// Single-cut crossover at a fixed cut point.
///
/// - child A = `parent1[..cut]`, then the rest of `parent2` in its order
/// - child B = `parent2[..cut]`, then the rest of `parent1` in its order
///
/// `cut` is clamped to the parent length.
///
/// ```
/// use u_tsp_ga::ga::operators::cut_crossover_at;
///
/// let (a, b) = cut_crossover_at(&[0, 1, 2, 3], &[3, 2, 1, 0], 2).unwrap();
/// assert_eq!(a, vec![0, 1, 3, 2]);
/// assert_eq!(b, vec![3, 2, 0, 1]);
/// ```
///
/// # Errors
/// [`SolveError::GeneLengthMismatch`] if the parents differ in length.
pub fn cut_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    cut: usize,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if parent1.len() != parent2.len() {
        return Err(SolveError::GeneLengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        });
    }
    let cut = cut.min(parent1.len());
    Ok((
        build_child(&parent1[..cut], parent2),
        build_child(&parent2[..cut], parent1),
    ))
}

/// Prefix followed by the donor's elements that the prefix lacks.
fn build_child(prefix: &[usize], donor: &[usize]) -> Vec<usize> {
    let taken: HashSet<usize> = prefix.iter().copied().collect();
    let mut child = Vec::with_capacity(donor.len());
    child.extend_from_slice(prefix);
    child.extend(donor.iter().copied().filter(|v| !taken.contains(v)));
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation gated by an integer percentage.
///
/// Draws a trigger uniformly from `0..=100`. If it is strictly below
/// `probability_percent`, two distinct positions are chosen uniformly
/// over all position pairs and swapped. The input is never modified; a
/// new tour is always returned. Tours shorter than two are returned
/// unchanged.
pub fn swap_mutation<R: Rng>(gene: &[usize], probability_percent: u32, rng: &mut R) -> Vec<usize> {
    let mut mutated = gene.to_vec();
    let n = mutated.len();
    if n < 2 {
        return mutated;
    }
    let trigger: u32 = rng.random_range(0..=100);
    if trigger < probability_percent {
        let picks = rand::seq::index::sample(rng, n, 2);
        mutated.swap(picks.index(0), picks.index(1));
    }
    mutated
}

// ============================================================================
// Tests
// ============================================================================
