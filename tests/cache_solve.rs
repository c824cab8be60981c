use std::cell::Cell;

use cache_matrix::{
    CacheMatrix, Error, GaussJordan, Inverter, Matrix, SolveOptions, cache_solve,
    cache_solve_with,
};
use rand::Rng;

/// Wraps the real inverter and counts how many times it is actually invoked.
struct CountingInverter {
    calls: Cell<usize>,
}

impl CountingInverter {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl Inverter for CountingInverter {
    fn invert(&self, matrix: &Matrix, opts: &SolveOptions) -> Result<Matrix, Error> {
        self.calls.set(self.calls.get() + 1);
        GaussJordan.invert(matrix, opts)
    }
}

fn opts() -> SolveOptions {
    SolveOptions::default()
}

#[test]
fn set_clears_cache() {
    let mut cached = CacheMatrix::new(Matrix::hilbert(3));
    cache_solve(&mut cached, &opts()).unwrap();
    assert!(cached.cached_inverse().is_some());

    cached.set(Matrix::identity(3));
    assert!(cached.cached_inverse().is_none());
}

#[test]
fn set_clears_cache_even_for_identical_value() {
    let m = Matrix::hilbert(3);
    let mut cached = CacheMatrix::new(m.clone());
    cache_solve(&mut cached, &opts()).unwrap();

    cached.set(m);
    assert!(cached.cached_inverse().is_none());
}

#[test]
fn two_sets_leave_cache_empty_regardless_of_solves() {
    let mut cached = CacheMatrix::new(Matrix::identity(2));
    cached.set(Matrix::hilbert(3));
    cache_solve(&mut cached, &opts()).unwrap();
    cached.set(Matrix::hilbert(4));
    assert!(cached.cached_inverse().is_none());
}

#[test]
fn fast_path_computes_once() {
    let mut cached = CacheMatrix::new(Matrix::hilbert(4));
    let inverter = CountingInverter::new();

    let first = cache_solve_with(&mut cached, &inverter, &opts()).unwrap();
    let second = cache_solve_with(&mut cached, &inverter, &opts()).unwrap();
    let third = cache_solve_with(&mut cached, &inverter, &opts()).unwrap();

    assert_eq!(inverter.calls.get(), 1);
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn hilbert_4_inverse_is_correct() {
    let m = Matrix::hilbert(4);
    let mut cached = CacheMatrix::new(m.clone());

    let inv = cache_solve(&mut cached, &opts()).unwrap();
    let product = m.multiply(&inv).unwrap();
    assert!(product.max_abs_diff(&Matrix::identity(4)) < 1e-6);
}

#[test]
fn set_then_solve_returns_fresh_inverse() {
    let mut cached = CacheMatrix::new(Matrix::hilbert(4));
    cache_solve(&mut cached, &opts()).unwrap();

    let m6 = Matrix::hilbert(6);
    cached.set(m6.clone());
    let inv = cache_solve(&mut cached, &opts()).unwrap();

    assert_eq!(inv.rows(), 6);
    assert_eq!(inv.cols(), 6);
    let product = m6.multiply(&inv).unwrap();
    assert!(product.max_abs_diff(&Matrix::identity(6)) < 1e-4);
}

#[test]
fn default_container_holds_1x1_nan_and_fails_to_solve() {
    let mut cached = CacheMatrix::default();

    assert_eq!(cached.value().rows(), 1);
    assert_eq!(cached.value().cols(), 1);
    assert!(cached.value().get(0, 0).is_nan());

    let err = cache_solve(&mut cached, &opts()).unwrap_err();
    assert_eq!(err, Error::NonFinite(0, 0));
    assert!(cached.cached_inverse().is_none());
}

#[test]
fn singular_matrix_fails_and_caches_nothing() {
    let m = Matrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
    let mut cached = CacheMatrix::new(m);

    let err = cache_solve(&mut cached, &opts()).unwrap_err();
    assert!(matches!(err, Error::Singular(_)));
    assert!(cached.cached_inverse().is_none());
}

#[test]
fn non_square_matrix_fails() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let mut cached = CacheMatrix::new(m);

    let err = cache_solve(&mut cached, &opts()).unwrap_err();
    assert_eq!(err, Error::NotSquare(2, 3));
    assert!(cached.cached_inverse().is_none());
}

#[test]
fn set_inverse_overwrites_prior_entry() {
    let mut cached = CacheMatrix::new(Matrix::identity(2));
    cached.set_inverse(Matrix::identity(2));
    cached.set_inverse(Matrix::hilbert(2));
    assert_eq!(cached.cached_inverse(), Some(&Matrix::hilbert(2)));
}

#[test]
fn random_diagonally_dominant_matrices_invert() {
    let mut rng = rand::thread_rng();
    for n in 1..=8 {
        let mut rows = vec![vec![0.0; n]; n];
        for (i, row) in rows.iter_mut().enumerate() {
            for value in row.iter_mut() {
                *value = rng.gen_range(-1.0..1.0);
            }
            row[i] += n as f64 + 1.0;
        }

        let m = Matrix::from_rows(rows).unwrap();
        let mut cached = CacheMatrix::new(m.clone());
        let inv = cache_solve(&mut cached, &opts()).unwrap();
        let product = m.multiply(&inv).unwrap();
        assert!(product.max_abs_diff(&Matrix::identity(n)) < 1e-8);
    }
}
