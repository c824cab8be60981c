//! Dense row-major matrix values.

use crate::Error;

/// A dense, rectangular matrix of `f64` values.
///
/// `PartialEq` compares elementwise and bit-exact; use
/// [`Matrix::max_abs_diff`] for numeric closeness.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// Fails with [`Error::Empty`] when there are no rows or the rows have no
    /// columns, and with [`Error::Ragged`] when the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(Error::Empty);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::Ragged(i, row.len(), width));
            }
        }
        Ok(Self { rows })
    }

    // Callers must pass non-empty, rectangular rows.
    pub(crate) fn new_unchecked(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// The n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self::new_unchecked(rows)
    }

    /// The n×n Hilbert matrix: `H[i][j] = 1 / (i + j + 1)` with 0-based
    /// indices. Invertible for every `n`, increasingly ill-conditioned as
    /// `n` grows, which makes it a handy inversion workout.
    pub fn hilbert(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| 1.0 / (i + j + 1) as f64).collect())
            .collect();
        Self::new_unchecked(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// The entry at `(row, col)`. Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// The rows as slices, in order.
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// The matrix product `self × other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, Error> {
        if self.cols() != other.rows() {
            return Err(Error::DimensionMismatch(
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols(),
            ));
        }

        let (m, n, p) = (self.rows(), self.cols(), other.cols());
        let mut out = vec![vec![0.0; p]; m];
        for i in 0..m {
            for k in 0..n {
                let a = self.rows[i][k];
                for j in 0..p {
                    out[i][j] += a * other.rows[k][j];
                }
            }
        }
        Ok(Self::new_unchecked(out))
    }

    /// The largest absolute elementwise difference between two matrices, or
    /// infinity when their shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return f64::INFINITY;
        }
        self.rows
            .iter()
            .zip(&other.rows)
            .flat_map(|(a, b)| a.iter().zip(b).map(|(x, y)| (x - y).abs()))
            .fold(0.0, f64::max)
    }
}
