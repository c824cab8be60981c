//! A matrix container that lazily computes and caches its inverse.
//!
//! `cache-matrix` pairs a matrix value with a memoized inverse. The inverse
//! is computed on first request, stored inside the container, and served from
//! the cache on later requests. Replacing the value discards the cached
//! inverse, so a stale result can never be observed.
//!
//! # Features
//!
//! - [`CacheMatrix`], a container whose setter always invalidates the cache
//! - [`cache_solve`], the compute-once-then-reuse orchestrator
//! - [`GaussJordan`], a partial-pivoting inverter behind the [`Inverter`]
//!   trait so callers can substitute their own routine
//!
//! # Example
//!
//! ```
//! use cache_matrix::{CacheMatrix, Matrix, SolveOptions, cache_solve};
//!
//! fn main() -> Result<(), cache_matrix::Error> {
//!     let m = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]])?;
//!     let mut cached = CacheMatrix::new(m.clone());
//!     let opts = SolveOptions::default();
//!
//!     let inv = cache_solve(&mut cached, &opts)?; // computed
//!     let again = cache_solve(&mut cached, &opts)?; // served from cache
//!     assert_eq!(inv, again);
//!
//!     let product = m.multiply(&inv)?;
//!     assert!(product.max_abs_diff(&Matrix::identity(2)) < 1e-12);
//!     Ok(())
//! }
//! ```

mod cache;
mod error;
mod invert;
mod matrix;
mod solve;

pub use cache::CacheMatrix;
pub use error::Error;
pub use invert::{GaussJordan, Inverter, SolveOptions};
pub use matrix::Matrix;
pub use solve::{cache_solve, cache_solve_with};
