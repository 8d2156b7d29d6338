#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! These tests verify the composed pipeline:
//! - Intermediate vectors left in the buffer after a run
//! - Regression values for the weighted and unweighted pipelines
//! - Buffer reuse across calls of different sizes
//! - Detailed results and their Display output
//!
//! ## Test Organization
//!
//! 1. **Pipeline State** - Buffer contents after `run`
//! 2. **Regression** - Pinned distances
//! 3. **Buffer Reuse** - Shrinking/growing inputs, bit-identical repeats
//! 4. **Profiles** - WassersteinResult contents and formatting
//! 5. **Batches** - execute_many

use approx::assert_relative_eq;

use wasserstein::internals::engine::executor::{ExecutorConfig, WassersteinExecutor};
use wasserstein::internals::primitives::buffer::DistanceBuffer;
use wasserstein::internals::primitives::distribution::Distribution;
use wasserstein::internals::primitives::errors::WassersteinError;

static A: [f64; 4] = [3.4, 3.9, 7.5, 7.8];
static AW: [f64; 4] = [1.4, 0.9, 3.1, 7.2];
static B: [f64; 2] = [4.5, 1.4];
static BW: [f64; 2] = [3.2, 3.5];

// ============================================================================
// Pipeline State Tests
// ============================================================================

/// Test the intermediate vectors of the unweighted regression case.
#[test]
fn test_run_populates_buffer() {
    let mut buffer = DistanceBuffer::default();

    WassersteinExecutor::run(&Distribution::new(&A), &Distribution::new(&B), &mut buffer);

    assert_eq!(*buffer.support, vec![1.4, 3.4, 3.9, 4.5, 7.5, 7.8]);
    assert_eq!(buffer.deltas.len(), 5);
    assert_eq!(*buffer.u.perm, vec![0, 1, 2, 3]);
    assert_eq!(*buffer.v.perm, vec![1, 0]);
    assert_eq!(*buffer.u.lookup, vec![0, 1, 2, 2, 3]);
    assert_eq!(*buffer.v.lookup, vec![1, 1, 1, 2, 2]);
    assert_eq!(*buffer.u.cdf, vec![0.0, 0.25, 0.5, 0.5, 0.75]);
    assert_eq!(*buffer.v.cdf, vec![0.5, 0.5, 0.5, 1.0, 1.0]);
}

/// Test the weighted cumulative mass follows the rank permutation.
#[test]
fn test_run_weighted_cumulative() {
    let mut buffer = DistanceBuffer::default();

    WassersteinExecutor::run(
        &Distribution::weighted(&A, &AW),
        &Distribution::weighted(&B, &BW),
        &mut buffer,
    );

    assert_eq!(buffer.v.cumulative.len(), 3);
    assert_relative_eq!(buffer.v.cumulative[1], 3.5, epsilon = 1e-12);
    assert_relative_eq!(buffer.v.cumulative[2], 6.7, epsilon = 1e-12);
    assert_relative_eq!(buffer.u.cumulative[4], 12.6, epsilon = 1e-12);
}

// ============================================================================
// Regression Tests
// ============================================================================

/// Test the pinned unweighted distance.
#[test]
fn test_execute_unweighted_regression() {
    let d = WassersteinExecutor::execute(
        &Distribution::new(&A),
        &Distribution::new(&B),
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    )
    .unwrap();

    assert_relative_eq!(d, 2.7, epsilon = 1e-12);
}

/// Test the pinned weighted distance.
#[test]
fn test_execute_weighted_regression() {
    let d = WassersteinExecutor::execute(
        &Distribution::weighted(&A, &AW),
        &Distribution::weighted(&B, &BW),
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    )
    .unwrap();

    assert_relative_eq!(d, 4.078133143804786, epsilon = 1e-12);
}

/// Test that a weighted side may be compared with an unweighted side.
#[test]
fn test_execute_mixed_weighting() {
    let ones = [1.0; 4];
    let mut buffer = DistanceBuffer::default();

    let mixed = WassersteinExecutor::execute(
        &Distribution::weighted(&A, &ones),
        &Distribution::new(&B),
        ExecutorConfig::default(),
        &mut buffer,
    )
    .unwrap();

    assert_relative_eq!(mixed, 2.7, epsilon = 1e-12);
}

/// Test that validation errors surface before any computation.
#[test]
fn test_execute_rejects_invalid_input() {
    let mut buffer = DistanceBuffer::default();

    let result = WassersteinExecutor::execute(
        &Distribution::weighted(&A, &[1.0, 1.0]),
        &Distribution::new(&B),
        ExecutorConfig::default(),
        &mut buffer,
    );

    assert!(matches!(
        result,
        Err(WassersteinError::InconsistentWeights { .. })
    ));
    assert!(buffer.support.is_empty(), "Nothing is computed on failure");
}

// ============================================================================
// Buffer Reuse Tests
// ============================================================================

/// Test that one buffer serves inputs of different sizes.
#[test]
fn test_buffer_reuse_across_sizes() {
    let mut buffer = DistanceBuffer::with_capacity(2);
    let large: Vec<f64> = (0..50).map(|i| i as f64 * 0.5).collect();

    let d_large =
        WassersteinExecutor::run(&Distribution::new(&large), &Distribution::new(&B), &mut buffer);
    let d_small = WassersteinExecutor::run(&Distribution::new(&A), &Distribution::new(&B), &mut buffer);

    assert!(d_large > 0.0);
    assert_relative_eq!(d_small, 2.7, epsilon = 1e-12);
    assert_eq!(buffer.support.len(), 6, "Stale support entries must not survive");
}

/// Test that repeated runs are bit-identical.
#[test]
fn test_repeated_runs_bit_identical() {
    let mut buffer = DistanceBuffer::default();
    let u = Distribution::weighted(&A, &AW);
    let v = Distribution::weighted(&B, &BW);

    let first = WassersteinExecutor::run(&u, &v, &mut buffer);
    for _ in 0..10 {
        let again = WassersteinExecutor::run(&u, &v, &mut buffer);
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

// ============================================================================
// Profile Tests
// ============================================================================

/// Test that a profile carries consistent intermediate vectors.
#[test]
fn test_execute_profile_contents() {
    let result = WassersteinExecutor::execute_profile(
        &Distribution::new(&A),
        &Distribution::new(&B),
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    )
    .unwrap();

    assert_eq!(result.support.len(), 6);
    assert_eq!(result.intervals(), 5);
    assert_eq!(result.cdf_u.len(), 5);
    assert_eq!(result.cdf_v.len(), 5);

    let total: f64 = result.contributions().iter().sum();
    assert_relative_eq!(total, result.distance, epsilon = 1e-12);
    assert_relative_eq!(result.contributions()[3], 1.5, epsilon = 1e-12);
}

/// Test the Display output of a profile.
#[test]
fn test_profile_display() {
    let result = WassersteinExecutor::execute_profile(
        &Distribution::new(&[0.0, 1.0]),
        &Distribution::new(&[5.0, 6.0]),
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    )
    .unwrap();

    let text = result.to_string();
    assert!(text.contains("Support points: 4"));
    assert!(text.contains("Intervals:      3"));
    assert!(text.contains("Distance:       5"));
    assert!(text.contains("CDF Profile:"));
    assert!(text.contains("Contribution"));
}

/// Test that long profiles elide the middle rows.
#[test]
fn test_profile_display_elides_rows() {
    let u: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let v: Vec<f64> = (0..30).map(|i| i as f64 + 0.5).collect();

    let result = WassersteinExecutor::execute_profile(
        &Distribution::new(&u),
        &Distribution::new(&v),
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    )
    .unwrap();

    let text = result.to_string();
    assert!(text.contains("..."));
    assert_relative_eq!(result.distance, 0.5, epsilon = 1e-12);
}

// ============================================================================
// Batch Tests
// ============================================================================

/// Test that execute_many matches individual runs.
#[test]
fn test_execute_many_matches_single() {
    let pairs = vec![
        (Distribution::new(&A[..]), Distribution::new(&B[..])),
        (Distribution::weighted(&A[..], &AW[..]), Distribution::weighted(&B[..], &BW[..])),
        (Distribution::new(&[1.0]), Distribution::new(&[4.0])),
    ];

    let distances = WassersteinExecutor::execute_many(
        &pairs,
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    )
    .unwrap();

    assert_eq!(distances.len(), 3);
    assert_relative_eq!(distances[0], 2.7, epsilon = 1e-12);
    assert_relative_eq!(distances[1], 4.078133143804786, epsilon = 1e-12);
    assert_relative_eq!(distances[2], 3.0, epsilon = 1e-12);
}

/// Test that one invalid pair fails the whole batch.
#[test]
fn test_execute_many_atomic_failure() {
    let empty: [f64; 0] = [];
    let pairs = vec![
        (Distribution::new(&A[..]), Distribution::new(&B[..])),
        (Distribution::new(&empty[..]), Distribution::new(&B[..])),
    ];

    let result = WassersteinExecutor::execute_many(
        &pairs,
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    );

    assert!(matches!(
        result,
        Err(WassersteinError::EmptyDistribution { .. })
    ));
}
