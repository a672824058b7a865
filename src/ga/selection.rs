//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! Each tour is weighted by the inverse of its closed-tour cost, so
//! shorter tours are drawn more often. The weights are accumulated into a
//! normalized cumulative distribution once per generation, and parent
//! indices are drawn from it by linear scan.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use crate::error::{Result, SolveError};
use crate::matrix::DistanceMatrix;
use crate::tour::{close_tour, closed_tour_cost};

/// Normalized cumulative inverse-cost distribution over a population.
///
/// Entry `i` is `sum(1/cost_k for k in 0..=i) / sum(1/cost_k)`. The
/// entries are non-decreasing and the last one is exactly `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeDistribution {
    cumulative: Vec<f64>,
}

impl CumulativeDistribution {
    /// Builds the distribution from a population in its current order.
    ///
    /// # Errors
    /// - [`SolveError::InvalidConfig`] if the population is empty
    /// - [`SolveError::DegenerateCost`] if any closed tour costs zero or a
    ///   non-finite amount, or if the inverse-cost weights overflow
    /// - [`SolveError::MalformedMatrix`] if any closed tour has a negative
    ///   cost
    pub fn from_population(population: &[Vec<usize>], matrix: &DistanceMatrix) -> Result<Self> {
        let costs: Vec<f64> = population
            .iter()
            .map(|gene| closed_tour_cost(gene, matrix))
            .collect();
        Self::from_costs(population, &costs)
    }

    fn from_costs(population: &[Vec<usize>], costs: &[f64]) -> Result<Self> {
        if costs.is_empty() {
            return Err(SolveError::InvalidConfig(
                "cannot select from empty population".into(),
            ));
        }

        let mut cumulative = Vec::with_capacity(costs.len());
        let mut total = 0.0;
        for (gene, &cost) in population.iter().zip(costs) {
            if cost == 0.0 || !cost.is_finite() {
                return Err(SolveError::DegenerateCost {
                    tour: close_tour(gene),
                    cost,
                });
            }
            if cost < 0.0 {
                return Err(SolveError::MalformedMatrix(format!(
                    "closed tour {gene:?} has negative cost {cost}"
                )));
            }
            let weight = 1.0 / cost;
            total += weight;
            if !weight.is_finite() || !total.is_finite() {
                // Subnormal costs overflow their inverse.
                return Err(SolveError::DegenerateCost {
                    tour: close_tour(gene),
                    cost,
                });
            }
            cumulative.push(total);
        }

        for c in &mut cumulative {
            *c /= total;
        }

        Ok(Self { cumulative })
    }

    /// Draws one index.
    ///
    /// Samples `r` uniformly in `[0, 1)` and returns the smallest `i` with
    /// `r <= cumulative[i]`. Falls back to index 0 if no entry matches.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.random();
        self.index_of(r)
    }

    /// Draws two independent indices. They may be equal.
    pub fn draw_pair<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let first = self.draw(rng);
        let second = self.draw(rng);
        (first, second)
    }

    /// Index whose interval `[cumulative[i-1], cumulative[i]]` holds `r`.
    fn index_of(&self, r: f64) -> usize {
        self.cumulative.iter().position(|&c| r <= c).unwrap_or(0)
    }

    /// The cumulative entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.cumulative
    }

    /// Number of entries (the population size).
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always `false`: construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use u_numflow::random::create_rng;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    #[test]
    fn test_weights_follow_inverse_cost() {
        // Closed costs 4 (perimeter) and 2 + 2*sqrt(2) (crossing).
        let population = vec![vec![0, 1, 2, 3], vec![0, 2, 1, 3]];
        let dist = CumulativeDistribution::from_population(&population, &square()).unwrap();

        let w0 = 1.0 / 4.0;
        let w1 = 1.0 / (2.0 + 2.0 * 2f64.sqrt());
        let expected = w0 / (w0 + w1);
        assert!((dist.as_slice()[0] - expected).abs() < 1e-12);
        assert_eq!(dist.as_slice()[1], 1.0);
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn test_uniform_costs_give_even_steps() {
        let m = DistanceMatrix::from_flat(3, vec![1.0; 9]).unwrap();
        let population = vec![vec![0, 1, 2]; 4];
        let dist = CumulativeDistribution::from_population(&population, &m).unwrap();
        for (i, &c) in dist.as_slice().iter().enumerate() {
            assert!((c - (i + 1) as f64 / 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_index_of_boundaries() {
        let dist = CumulativeDistribution {
            cumulative: vec![0.25, 0.5, 1.0],
        };
        assert_eq!(dist.index_of(0.0), 0);
        assert_eq!(dist.index_of(0.25), 0);
        assert_eq!(dist.index_of(0.2500001), 1);
        assert_eq!(dist.index_of(0.5), 1);
        assert_eq!(dist.index_of(0.75), 2);
        assert_eq!(dist.index_of(0.9999), 2);
    }

    #[test]
    fn test_draw_favors_cheaper_tour() {
        let m = DistanceMatrix::new(vec![
            vec![0.0, 1.0, 9.0],
            vec![9.0, 0.0, 1.0],
            vec![1.0, 9.0, 0.0],
        ])
        .unwrap();
        // Closed costs: 3 for the forward cycle, 27 for the reverse.
        let population = vec![vec![0, 2, 1], vec![0, 1, 2]];
        let dist = CumulativeDistribution::from_population(&population, &m).unwrap();

        let mut rng = create_rng(42);
        let mut counts = [0u32; 2];
        let n = 10_000;
        for _ in 0..n {
            counts[dist.draw(&mut rng)] += 1;
        }
        // Expected share of index 1 is 9/10.
        assert!(
            counts[1] > 8500 && counts[1] < 9500,
            "expected ~90% for the cheap tour, got {counts:?}"
        );
    }

    #[test]
    fn test_single_gene_always_zero() {
        let m = square();
        let dist = CumulativeDistribution::from_population(&[vec![0, 1, 2, 3]], &m).unwrap();
        let mut rng = create_rng(7);
        for _ in 0..100 {
            assert_eq!(dist.draw_pair(&mut rng), (0, 0));
        }
    }

    #[test]
    fn test_draw_pair_may_repeat() {
        let m = DistanceMatrix::from_flat(3, vec![1.0; 9]).unwrap();
        let dist = CumulativeDistribution::from_population(&vec![vec![0, 1, 2]; 3], &m).unwrap();
        let mut rng = create_rng(42);
        let same = (0..1000)
            .map(|_| dist.draw_pair(&mut rng))
            .filter(|(a, b)| a == b)
            .count();
        assert!(same > 0, "self-pairs are allowed and should occur");
    }

    #[test]
    fn test_zero_cost_is_degenerate() {
        let m = DistanceMatrix::from_flat(2, vec![0.0; 4]).unwrap();
        let err = CumulativeDistribution::from_population(&[vec![1, 0]], &m).unwrap_err();
        assert_eq!(
            err,
            SolveError::DegenerateCost {
                tour: vec![1, 0, 1],
                cost: 0.0
            }
        );
    }

    #[test]
    fn test_negative_cost_rejected() {
        // Matrices refuse negative entries, so feed the costs directly.
        let population = vec![vec![0, 1], vec![1, 0]];
        let err = CumulativeDistribution::from_costs(&population, &[2.0, -2.0]).unwrap_err();
        assert!(matches!(err, SolveError::MalformedMatrix(_)));
    }

    #[test]
    fn test_subnormal_costs_rejected() {
        let m = DistanceMatrix::from_flat(
            3,
            vec![0.0, 1e-310, 1e-310, 1e-310, 0.0, 1e-310, 1e-310, 1e-310, 0.0],
        )
        .unwrap();
        let population = vec![vec![0, 1, 2], vec![0, 2, 1]];
        let err = CumulativeDistribution::from_population(&population, &m).unwrap_err();
        assert!(matches!(err, SolveError::DegenerateCost { .. }), "{err}");
    }

    #[test]
    fn test_weight_total_overflow_rejected() {
        // Each weight is finite on its own; their sum is not.
        let population = vec![vec![0, 1], vec![1, 0]];
        let err = CumulativeDistribution::from_costs(&population, &[1e-308, 1e-308]).unwrap_err();
        assert_eq!(
            err,
            SolveError::DegenerateCost {
                tour: vec![1, 0, 1],
                cost: 1e-308
            }
        );
    }

    #[test]
    fn test_empty_population_rejected() {
        let err = CumulativeDistribution::from_population(&[], &square()).unwrap_err();
        assert!(matches!(err, SolveError::InvalidConfig(_)));
    }

    proptest! {
        #[test]
        fn prop_distribution_monotone_and_normalized(
            costs in prop::collection::vec(1e-3f64..1e6, 1..64)
        ) {
            let population: Vec<Vec<usize>> = costs.iter().map(|_| vec![0]).collect();
            let dist = CumulativeDistribution::from_costs(&population, &costs).unwrap();
            let entries = dist.as_slice();
            prop_assert_eq!(entries.len(), costs.len());
            for w in entries.windows(2) {
                prop_assert!(w[0] <= w[1]);
            }
            prop_assert!((entries[entries.len() - 1] - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_draw_in_range(
            costs in prop::collection::vec(1e-3f64..1e6, 1..64),
            seed in any::<u64>(),
        ) {
            let population: Vec<Vec<usize>> = costs.iter().map(|_| vec![0]).collect();
            let dist = CumulativeDistribution::from_costs(&population, &costs).unwrap();
            let mut rng = create_rng(seed);
            for _ in 0..32 {
                let (a, b) = dist.draw_pair(&mut rng);
                prop_assert!(a < costs.len() && b < costs.len());
            }
        }
    }
}
