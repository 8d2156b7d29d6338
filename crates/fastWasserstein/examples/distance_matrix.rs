//! fastWasserstein Distance Matrix Examples
//!
//! This example demonstrates features specific to `fastWasserstein`:
//! - Parallel pairwise matrices using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - Weighted cross matrices
//! - Batch-level validation errors
//!
//! Run with `RUST_LOG=debug` to see the batch spans.

use fastWasserstein::prelude::*;
use ndarray::Array2;
use std::time::Instant;

fn main() -> Result<(), WassersteinError> {
    tracing_subscriber::fmt::init();

    println!("{}", "=".repeat(80));
    println!("fastWasserstein Distance Matrix Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_pairwise()?;
    example_2_ndarray_rows()?;
    example_3_weighted_cross()?;
    example_4_invalid_batch()?;

    Ok(())
}

/// Shifted copies of a deterministic wave, one per group.
fn groups(count: usize, len: usize) -> Vec<Vec<f64>> {
    (0..count)
        .map(|k| {
            (0..len)
                .map(|i| (i as f64 * 0.37).sin() * 2.0 + k as f64 * 0.5)
                .collect()
        })
        .collect()
}

/// Example 1: Parallel Pairwise Matrix
/// Compares parallel and sequential execution on the same inputs
fn example_1_parallel_pairwise() -> Result<(), WassersteinError> {
    println!("Example 1: Parallel Pairwise Matrix");
    println!("{}", "-".repeat(80));

    let data = groups(64, 5_000);
    let dists: Vec<Distribution<'_, f64>> = data.iter().map(|s| Distribution::new(s)).collect();

    let start = Instant::now();
    let parallel = Wasserstein::new().parallel(true).batch().build()?;
    let par = parallel.pairwise(&dists)?;
    let par_time = start.elapsed();

    let start = Instant::now();
    let sequential = Wasserstein::new().parallel(false).batch().build()?;
    let seq = sequential.pairwise(&dists)?;
    let seq_time = start.elapsed();

    println!("Matrix shape:      {:?}", par.dim());
    println!("Parallel time:     {:?}", par_time);
    println!("Sequential time:   {:?}", seq_time);
    println!("Identical results: {}", par == seq);
    println!("W(0, 1) = {:.6}", par[[0, 1]]);
    println!("W(0, 63) = {:.6}", par[[0, 63]]);
    println!();

    Ok(())
}

/// Example 2: ndarray Integration
/// Each row of a 2-D array is one distribution
fn example_2_ndarray_rows() -> Result<(), WassersteinError> {
    println!("Example 2: ndarray Integration");
    println!("{}", "-".repeat(80));

    let samples = Array2::from_shape_fn((4, 6), |(i, j)| j as f64 + i as f64 * 1.5);
    let batch = Wasserstein::new().batch().build()?;
    let matrix = batch.pairwise_rows(&samples)?;

    println!("{:.3}", matrix);
    println!();

    Ok(())
}

/// Example 3: Weighted Cross Matrix
/// Distances from every observed group to a set of weighted references
fn example_3_weighted_cross() -> Result<(), WassersteinError> {
    println!("Example 3: Weighted Cross Matrix");
    println!("{}", "-".repeat(80));

    let data = groups(3, 200);
    let observed: Vec<_> = data.iter().map(|s| Distribution::new(s)).collect();

    let support = [-2.0, 0.0, 2.0];
    let flat = [1.0, 1.0, 1.0];
    let centered = [1.0, 4.0, 1.0];
    let references = [
        Distribution::weighted(&support[..], &flat[..]),
        Distribution::weighted(&support[..], &centered[..]),
    ];

    let batch = Wasserstein::new().batch().build()?;
    let matrix = batch.cross(&observed, &references)?;

    for (i, row) in matrix.rows().into_iter().enumerate() {
        println!("group {}: flat={:.4} centered={:.4}", i, row[0], row[1]);
    }
    println!();

    Ok(())
}

/// Example 4: Batch Validation
/// One bad distribution fails the whole call
fn example_4_invalid_batch() -> Result<(), WassersteinError> {
    println!("Example 4: Batch Validation");
    println!("{}", "-".repeat(80));

    let good = [1.0, 2.0, 3.0];
    let weights = [1.0, 0.0, 0.0];
    let zero = [0.0, 0.0];
    let dists = [
        Distribution::weighted(&good[..], &weights[..]),
        Distribution::weighted(&good[..2], &zero[..]),
    ];

    let batch = Wasserstein::new().batch().build()?;
    match batch.pairwise(&dists) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Rejected: {}", e),
    }
    println!();

    Ok(())
}
