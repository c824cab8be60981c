//! Lazy inverse computation over a [`CacheMatrix`].

use tracing::debug;

use crate::Error;
use crate::cache::CacheMatrix;
use crate::invert::{GaussJordan, Inverter, SolveOptions};
use crate::matrix::Matrix;

/// Returns the inverse of the container's current matrix, computing it at
/// most once per held value.
///
/// A cache hit returns a clone of the stored inverse with no numeric work. A
/// miss inverts the current matrix with [`GaussJordan`], stores the result in
/// the container, and returns a copy. Inversion errors propagate unmodified
/// and leave the cache slot empty.
pub fn cache_solve(matrix: &mut CacheMatrix, opts: &SolveOptions) -> Result<Matrix, Error> {
    cache_solve_with(matrix, &GaussJordan, opts)
}

/// Like [`cache_solve`], but with a caller-supplied inversion routine.
///
/// `opts` is forwarded to the inverter verbatim.
pub fn cache_solve_with<I: Inverter>(
    matrix: &mut CacheMatrix,
    inverter: &I,
    opts: &SolveOptions,
) -> Result<Matrix, Error> {
    if let Some(inv) = matrix.cached_inverse() {
        debug!("cache hit, returning stored inverse");
        return Ok(inv.clone());
    }

    debug!(
        rows = matrix.value().rows(),
        cols = matrix.value().cols(),
        "cache miss, computing inverse"
    );
    let inv = inverter.invert(matrix.value(), opts)?;
    matrix.set_inverse(inv.clone());
    Ok(inv)
}
