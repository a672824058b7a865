//! Plateau detection over a bounded window of best costs.

use std::collections::VecDeque;

/// Bounded FIFO of per-generation best costs.
///
/// Once more than `capacity` values have been pushed, the oldest is
/// evicted. The run is considered converged when the window is full and
/// its oldest and newest values are exactly equal.
///
/// ```
/// use u_tsp_ga::ga::FitnessHistory;
///
/// let mut history = FitnessHistory::new(3);
/// history.push(10.0);
/// history.push(8.0);
/// history.push(8.0);
/// assert!(!history.is_converged());
/// history.push(8.0);
/// assert!(history.is_converged());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessHistory {
    window: VecDeque<f64>,
    capacity: usize,
}

impl FitnessHistory {
    /// Creates an empty window holding at most `capacity` values.
    pub fn new(capacity: usize) -> Self {
        Self {
            window: VecDeque::new(),
            capacity,
        }
    }

    /// Records a best cost, evicting the oldest value if over capacity.
    pub fn push(&mut self, cost: f64) {
        self.window.push_back(cost);
        while self.window.len() > self.capacity {
            self.window.pop_front();
        }
    }

    /// `true` iff the window is full and `oldest == newest`.
    ///
    /// Equality is exact; no tolerance is applied.
    pub fn is_converged(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        match (self.oldest(), self.newest()) {
            (Some(oldest), Some(newest)) => oldest == newest,
            _ => false,
        }
    }

    /// Whether the window holds `capacity` values.
    pub fn is_full(&self) -> bool {
        self.window.len() == self.capacity
    }

    /// Oldest value still in the window.
    pub fn oldest(&self) -> Option<f64> {
        self.window.front().copied()
    }

    /// Most recently pushed value.
    pub fn newest(&self) -> Option<f64> {
        self.window.back().copied()
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// `true` before the first push.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Maximum number of values kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.window.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plateau_converges() {
        let mut history = FitnessHistory::new(4);
        for _ in 0..4 {
            history.push(12.5);
        }
        assert!(history.is_full());
        assert!(history.is_converged());
    }

    #[test]
    fn test_improvement_keeps_running() {
        let mut history = FitnessHistory::new(4);
        for cost in [14.0, 13.0, 12.5, 12.5] {
            history.push(cost);
        }
        assert!(history.is_full());
        assert!(!history.is_converged());
    }

    #[test]
    fn test_not_full_never_converges() {
        let mut history = FitnessHistory::new(5);
        history.push(3.0);
        history.push(3.0);
        assert!(!history.is_converged());
    }

    #[test]
    fn test_fifo_eviction() {
        let mut history = FitnessHistory::new(3);
        for cost in [9.0, 8.0, 7.0, 7.0, 7.0] {
            history.push(cost);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![7.0, 7.0, 7.0]);
        assert!(history.is_converged());
    }

    #[test]
    fn test_only_endpoints_compared() {
        // A dip inside the window does not matter; only oldest vs newest.
        let mut history = FitnessHistory::new(3);
        for cost in [5.0, 4.0, 5.0] {
            history.push(cost);
        }
        assert!(history.is_converged());
    }

    #[test]
    fn test_capacity_one_stops_immediately() {
        let mut history = FitnessHistory::new(1);
        assert!(!history.is_converged());
        history.push(42.0);
        assert!(history.is_converged());
        assert_eq!(history.oldest(), history.newest());
    }

    #[test]
    fn test_no_tolerance() {
        let mut history = FitnessHistory::new(2);
        history.push(1.0);
        history.push(1.0 + f64::EPSILON);
        assert!(!history.is_converged());
    }
}
