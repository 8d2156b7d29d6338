#![cfg(feature = "dev")]
//! Tests for empirical CDF construction.
//!
//! These tests verify the three CDF stages:
//! - Lookup of samples at or below each interval's left edge
//! - Cumulative counts and cumulative weights in sorted order
//! - Normalization into CDF values
//!
//! ## Test Organization
//!
//! 1. **Lookup** - Upper-bound semantics, saturation, last point exclusion
//! 2. **Cumulative Mass** - Counts and permuted weights
//! 3. **Evaluation** - Uniform and weighted CDF values

use approx::assert_relative_eq;

use wasserstein::internals::math::cdf::{
    cumulative_counts_into, cumulative_weights_into, evaluate_cdf_into, search_sorted_into,
};

static SUPPORT: [f64; 6] = [1.4, 3.4, 3.9, 4.5, 7.5, 7.8];

// ============================================================================
// Lookup Tests
// ============================================================================

/// Test lookup indices for the first regression distribution.
#[test]
fn test_search_sorted_regression_a() {
    let sorted = vec![3.4, 3.9, 7.5, 7.8];
    let mut lookup = Vec::new();

    search_sorted_into(&sorted, &SUPPORT, &mut lookup);

    assert_eq!(lookup, vec![0, 1, 2, 2, 3]);
}

/// Test lookup indices for the second regression distribution.
#[test]
fn test_search_sorted_regression_b() {
    let sorted = vec![1.4, 4.5];
    let mut lookup = Vec::new();

    search_sorted_into(&sorted, &SUPPORT, &mut lookup);

    assert_eq!(lookup, vec![1, 1, 1, 2, 2]);
}

/// Test that samples equal to the query point are counted (upper bound).
#[test]
fn test_search_sorted_counts_equal_values() {
    let sorted = vec![1.0, 2.0, 2.0, 2.0, 3.0];
    let mut lookup = Vec::new();

    search_sorted_into(&sorted, &[2.0, 10.0], &mut lookup);

    assert_eq!(lookup, vec![4], "All three 2.0 samples lie at or below 2.0");
}

/// Test saturation at the sample count above the largest sample.
#[test]
fn test_search_sorted_saturates() {
    let sorted = vec![0.0, 1.0];
    let mut lookup = Vec::new();

    search_sorted_into(&sorted, &[-1.0, 5.0, 6.0, 7.0], &mut lookup);

    assert_eq!(lookup, vec![0, 2, 2]);
}

/// Test that the last support point never gets a lookup entry.
#[test]
fn test_search_sorted_excludes_last_point() {
    let sorted = vec![1.0, 2.0, 3.0];
    let mut lookup = vec![99; 8];

    search_sorted_into(&sorted, &[1.0, 2.0, 3.0], &mut lookup);
    assert_eq!(lookup, vec![1, 2]);

    search_sorted_into(&sorted, &[1.0], &mut lookup);
    assert!(lookup.is_empty());

    search_sorted_into(&sorted, &[], &mut lookup);
    assert!(lookup.is_empty());
}

// ============================================================================
// Cumulative Mass Tests
// ============================================================================

/// Test cumulative counts for unweighted samples.
#[test]
fn test_cumulative_counts() {
    let mut cumulative: Vec<f64> = Vec::new();

    cumulative_counts_into(4, &mut cumulative);

    assert_eq!(cumulative, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

/// Test that weights are accumulated in sorted-by-value order.
#[test]
fn test_cumulative_weights_follow_permutation() {
    // values [4.5, 1.4] sort to perm [1, 0]
    let weights = vec![3.2, 3.5];
    let perm = vec![1, 0];
    let mut cumulative = Vec::new();

    cumulative_weights_into(&weights, &perm, &mut cumulative);

    assert_eq!(cumulative.len(), weights.len() + 1);
    assert_relative_eq!(cumulative[0], 0.0);
    assert_relative_eq!(cumulative[1], 3.5, epsilon = 1e-12);
    assert_relative_eq!(cumulative[2], 6.7, epsilon = 1e-12);
}

/// Test that zero weights leave the cumulative mass flat.
#[test]
fn test_cumulative_weights_zero_weight() {
    let weights = vec![1.0, 0.0, 2.0];
    let perm = vec![0, 1, 2];
    let mut cumulative = Vec::new();

    cumulative_weights_into(&weights, &perm, &mut cumulative);

    assert_eq!(cumulative, vec![0.0, 1.0, 1.0, 3.0]);
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test uniform CDF values for the first regression distribution.
#[test]
fn test_evaluate_cdf_uniform() {
    let mut cumulative: Vec<f64> = Vec::new();
    let mut cdf = Vec::new();

    cumulative_counts_into(4, &mut cumulative);
    evaluate_cdf_into(&cumulative, &[0, 1, 2, 2, 3], &mut cdf);

    assert_eq!(cdf, vec![0.0, 0.25, 0.5, 0.5, 0.75]);
}

/// Test weighted CDF values are normalized by the distribution's own total.
#[test]
fn test_evaluate_cdf_weighted() {
    let weights = vec![1.4, 0.9, 3.1, 7.2];
    let perm = vec![0, 1, 2, 3];
    let mut cumulative = Vec::new();
    let mut cdf = Vec::new();

    cumulative_weights_into(&weights, &perm, &mut cumulative);
    evaluate_cdf_into(&cumulative, &[0, 1, 2, 2, 3], &mut cdf);

    let total = 12.6;
    let expected = [0.0, 1.4 / total, 2.3 / total, 2.3 / total, 5.4 / total];
    for (c, e) in cdf.iter().zip(expected) {
        assert_relative_eq!(*c, e, epsilon = 1e-12);
    }
}

/// Test that a saturated lookup evaluates to exactly one.
#[test]
fn test_evaluate_cdf_saturated_is_one() {
    let mut cumulative = Vec::new();
    let mut cdf = Vec::new();

    cumulative_weights_into(&[0.3, 0.3, 0.4], &[2, 0, 1], &mut cumulative);
    evaluate_cdf_into(&cumulative, &[3, 3], &mut cdf);

    assert_eq!(cdf, vec![1.0, 1.0]);
}

/// Test that CDF values are non-decreasing along the support.
#[test]
fn test_evaluate_cdf_monotone() {
    let sorted = vec![-2.0, 0.0, 0.0, 1.5, 9.0];
    let support = vec![-3.0, -2.0, -1.0, 0.0, 0.0, 1.0, 1.5, 4.0, 9.0, 12.0];
    let mut lookup = Vec::new();
    let mut cumulative: Vec<f64> = Vec::new();
    let mut cdf = Vec::new();

    search_sorted_into(&sorted, &support, &mut lookup);
    cumulative_counts_into(sorted.len(), &mut cumulative);
    evaluate_cdf_into(&cumulative, &lookup, &mut cdf);

    assert_eq!(cdf.len(), support.len() - 1);
    assert!(cdf.windows(2).all(|w| w[0] <= w[1]));
    assert!(cdf.iter().all(|&c| (0.0..=1.0).contains(&c)));
}
