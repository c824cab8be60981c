//! Error types for cache-matrix operations.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("matrix has no elements")]
    Empty,

    #[error("row {0} has {1} columns, expected {2}")]
    Ragged(usize, usize, usize),

    #[error("matrix is not square: {0}x{1}")]
    NotSquare(usize, usize),

    #[error("matrix is singular: no usable pivot in column {0}")]
    Singular(usize),

    #[error("non-finite entry at row {0}, column {1}")]
    NonFinite(usize, usize),

    #[error("dimension mismatch: left is {0}x{1}, right is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),
}
