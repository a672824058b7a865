//! Distance matrix container.
//!
//! [`DistanceMatrix`] stores an N×N cost table in row-major order.
//! Construction validates the shape and entries, so every matrix the
//! solver sees is non-empty, square, finite and non-negative. With the
//! `serde` feature the matrix (de)serializes as nested rows, and
//! deserialization runs the same checks as [`DistanceMatrix::new`].

use crate::error::{Result, SolveError};

/// An N×N table of travel costs between locations.
///
/// `get(i, j)` is the cost of travelling from location `i` to location
/// `j`. The matrix need not be symmetric.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::DistanceMatrix;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 2.0],
///     vec![3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.dimension(), 2);
/// assert_eq!(m.get(1, 0), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// Fails with [`SolveError::MalformedMatrix`] if there are no rows, if
    /// any row length differs from the row count, or if any entry is NaN,
    /// infinite or negative.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(SolveError::MalformedMatrix("matrix is empty".into()));
        }
        let mut data = Vec::with_capacity(entry_count(n)?);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SolveError::MalformedMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_flat(n, data)
    }

    /// Builds a matrix from `n * n` values in row-major order.
    pub fn from_flat(n: usize, data: Vec<f64>) -> Result<Self> {
        if n == 0 {
            return Err(SolveError::MalformedMatrix("matrix is empty".into()));
        }
        let expected = entry_count(n)?;
        if data.len() != expected {
            return Err(SolveError::MalformedMatrix(format!(
                "expected {expected} entries for a {n}x{n} matrix, got {}",
                data.len()
            )));
        }
        for (pos, &v) in data.iter().enumerate() {
            let problem = if !v.is_finite() {
                "is not finite"
            } else if v < 0.0 {
                "is negative"
            } else {
                continue;
            };
            return Err(SolveError::MalformedMatrix(format!(
                "entry ({}, {}) {problem}",
                pos / n,
                pos % n
            )));
        }
        Ok(Self { n, data })
    }

    /// Builds a symmetric Euclidean matrix from planar coordinates.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let n = points.len();
        let mut data = Vec::with_capacity(entry_count(n)?);
        for &(xi, yi) in points {
            for &(xj, yj) in points {
                data.push((xi - xj).hypot(yi - yj));
            }
        }
        Self::from_flat(n, data)
    }

    /// Number of locations N.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is `>= dimension()`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.n && to < self.n,
            "index ({from}, {to}) out of bounds for {0}x{0} matrix",
            self.n
        );
        self.data[from * self.n + to]
    }

    /// Outgoing costs of location `i`.
    ///
    /// # Panics
    /// Panics if `i >= dimension()`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(
            i < self.n,
            "row {i} out of bounds for {0}x{0} matrix",
            self.n
        );
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// `n * n`, or an error if it does not fit in `usize`.
fn entry_count(n: usize) -> Result<usize> {
    n.checked_mul(n).ok_or_else(|| {
        SolveError::MalformedMatrix(format!("a {n}x{n} matrix does not fit in memory"))
    })
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix
            .data
            .chunks(matrix.n)
            .map(<[f64]>::to_vec)
            .collect()
    }
}
