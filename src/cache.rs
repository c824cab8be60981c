//! The memoizing matrix container.

use crate::matrix::Matrix;

/// Holds one matrix value and at most one cached inverse for that value.
///
/// Replacing the value through [`CacheMatrix::set`] always discards the
/// cached inverse, so a present cache entry is guaranteed to belong to the
/// currently held matrix. The container does no numeric work itself; the
/// lazy computation lives in [`cache_solve`](crate::cache_solve).
///
/// The container is exclusively owned: all mutation goes through `&mut self`,
/// so one container cannot be shared between concurrent callers.
#[derive(Debug, Clone)]
pub struct CacheMatrix {
    value: Matrix,
    inverse: Option<Matrix>,
}

impl CacheMatrix {
    /// Creates a container holding `value`, with no cached inverse.
    pub fn new(value: Matrix) -> Self {
        Self {
            value,
            inverse: None,
        }
    }

    /// Replaces the held matrix and discards any cached inverse.
    ///
    /// The cache is cleared even when `value` equals the current matrix; the
    /// container never compares matrices for equality.
    pub fn set(&mut self, value: Matrix) {
        self.value = value;
        self.inverse = None;
    }

    /// The currently held matrix.
    pub fn value(&self) -> &Matrix {
        &self.value
    }

    /// Stores `inv` as the cached inverse, overwriting any prior entry.
    ///
    /// No check is made that `inv` actually inverts the held matrix; callers
    /// other than [`cache_solve`](crate::cache_solve) should rarely need
    /// this.
    pub fn set_inverse(&mut self, inv: Matrix) {
        self.inverse = Some(inv);
    }

    /// The cached inverse, if one has been stored since the last
    /// [`CacheMatrix::set`].
    pub fn cached_inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }
}

impl Default for CacheMatrix {
    /// A container holding the placeholder value: a 1×1 matrix containing
    /// `NaN`. Solving it fails with [`Error::NonFinite`](crate::Error) and
    /// leaves the cache empty.
    fn default() -> Self {
        Self::new(Matrix::new_unchecked(vec![vec![f64::NAN]]))
    }
}
