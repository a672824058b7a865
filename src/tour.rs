//! Tour cost and population ranking.
//!
//! A tour is a sequence of location indices. A *closed* tour repeats its
//! first location at the end, so its cost includes the return leg.

use crate::matrix::DistanceMatrix;

/// Sums the edge costs along consecutive pairs of `tour`.
///
/// The tour is taken as given: pass a closed tour (see [`close_tour`]) to
/// include the return to the start. Tours shorter than two locations cost
/// `0.0`.
///
/// ```
/// use u_tsp_ga::DistanceMatrix;
/// use u_tsp_ga::tour::tour_cost;
///
/// let m = DistanceMatrix::new(vec![vec![0.0, 2.0], vec![5.0, 0.0]]).unwrap();
/// assert_eq!(tour_cost(&[0, 1, 0], &m), 7.0);
/// ```
pub fn tour_cost(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    tour.windows(2).map(|w| matrix.get(w[0], w[1])).sum()
}

/// Returns a copy of `tour` with its first element appended.
pub fn close_tour(tour: &[usize]) -> Vec<usize> {
    let mut closed = Vec::with_capacity(tour.len() + 1);
    closed.extend_from_slice(tour);
    if let Some(&first) = tour.first() {
        closed.push(first);
    }
    closed
}

/// Cost of `tour` including the return leg to its first location.
pub fn closed_tour_cost(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    match tour.first() {
        Some(&first) => tour_cost(tour, matrix) + matrix.get(tour[tour.len() - 1], first),
        None => 0.0,
    }
}

/// Sorts `population` by ascending cost and keeps the best `target_size`.
///
/// With `close_before_scoring`, each tour is scored as a closed cycle.
/// The sort is stable, so tied tours keep their input order. The genes
/// themselves are returned unmodified.
pub fn rank_and_truncate(
    population: Vec<Vec<usize>>,
    matrix: &DistanceMatrix,
    target_size: usize,
    close_before_scoring: bool,
) -> Vec<Vec<usize>> {
    let mut scored: Vec<(f64, Vec<usize>)> = population
        .into_iter()
        .map(|gene| {
            let cost = if close_before_scoring {
                closed_tour_cost(&gene, matrix)
            } else {
                tour_cost(&gene, matrix)
            };
            (cost, gene)
        })
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.truncate(target_size);
    scored.into_iter().map(|(_, gene)| gene).collect()
}
