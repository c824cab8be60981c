//! Matrix inversion behind a pluggable seam.

use tracing::trace;

use crate::Error;
use crate::matrix::Matrix;

/// Options forwarded verbatim to the inversion routine.
///
/// The cache orchestrator in [`crate::cache_solve`] passes these through
/// without interpreting them; what they mean is up to the [`Inverter`].
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    /// Pivot magnitudes at or below this value are treated as zero, making
    /// the matrix singular.
    pub pivot_tolerance: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            pivot_tolerance: 1e-12,
        }
    }
}

/// A routine that produces the inverse of a square matrix.
pub trait Inverter {
    fn invert(&self, matrix: &Matrix, opts: &SolveOptions) -> Result<Matrix, Error>;
}

/// Gauss-Jordan elimination with partial pivoting.
///
/// Reduces the augmented block `[M | I]` to `[I | M⁻¹]`. Fails with
/// [`Error::NotSquare`] for rectangular input, [`Error::NonFinite`] if any
/// entry is NaN or infinite, and [`Error::Singular`] when no column pivot
/// exceeds [`SolveOptions::pivot_tolerance`].
pub struct GaussJordan;

impl Inverter for GaussJordan {
    fn invert(&self, matrix: &Matrix, opts: &SolveOptions) -> Result<Matrix, Error> {
        if !matrix.is_square() {
            return Err(Error::NotSquare(matrix.rows(), matrix.cols()));
        }
        let n = matrix.rows();
        for (i, row) in matrix.as_rows().iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(Error::NonFinite(i, j));
                }
            }
        }

        let mut aug: Vec<Vec<f64>> = matrix
            .as_rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut extended = row.clone();
                extended.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
                extended
            })
            .collect();

        for col in 0..n {
            let mut pivot_row = col;
            for row in (col + 1)..n {
                if aug[row][col].abs() > aug[pivot_row][col].abs() {
                    pivot_row = row;
                }
            }
            if aug[pivot_row][col].abs() <= opts.pivot_tolerance {
                return Err(Error::Singular(col));
            }
            aug.swap(col, pivot_row);
            trace!(col, pivot_row, "selected pivot");

            let pivot = aug[col][col];
            for value in &mut aug[col] {
                *value /= pivot;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = aug[row][col];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..2 * n {
                    aug[row][j] -= factor * aug[col][j];
                }
            }
        }

        let rows = aug.into_iter().map(|row| row[n..].to_vec()).collect();
        Matrix::from_rows(rows)
    }
}
