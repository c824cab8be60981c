use std::env;
use std::time::Instant;

use cache_matrix::{CacheMatrix, Error, Matrix, SolveOptions, cache_solve};
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    let kind = args.get(1).cloned().unwrap_or_else(|| "hilbert".to_string());
    let n: usize = args.get(2).unwrap_or(&"6".to_string()).parse()?;

    let matrix = match kind.as_str() {
        "random" => random_matrix(n)?,
        _ => Matrix::hilbert(n),
    };

    println!("Inverting a {}x{} {} matrix", n, n, kind);

    let mut cached = CacheMatrix::new(matrix.clone());
    let opts = SolveOptions::default();

    let start = Instant::now();
    let inverse = cache_solve(&mut cached, &opts)?;
    println!("  first call (computed): {:?}", start.elapsed());

    let start = Instant::now();
    let again = cache_solve(&mut cached, &opts)?;
    println!("  second call (cached):  {:?}", start.elapsed());
    println!("  cached result identical: {}", inverse == again);

    let residual = matrix
        .multiply(&inverse)?
        .max_abs_diff(&Matrix::identity(n));
    println!("  max |M*inv(M) - I| = {:e}", residual);

    Ok(())
}

/// A random diagonally dominant matrix, guaranteed invertible.
fn random_matrix(n: usize) -> Result<Matrix, Error> {
    let mut rng = rand::thread_rng();
    let mut rows = vec![vec![0.0; n]; n];
    for (i, row) in rows.iter_mut().enumerate() {
        for value in row.iter_mut() {
            *value = rng.gen_range(-1.0..1.0);
        }
        row[i] += n as f64;
    }
    Matrix::from_rows(rows)
}
