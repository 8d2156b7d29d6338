#![cfg(feature = "dev")]
//! Tests for sorting utilities.
//!
//! These tests verify the ordering primitives the distance pipeline uses for:
//! - Rank permutations (argsort) of each distribution
//! - Ascending sort of the merged support
//! - Gathering values through a permutation
//!
//! ## Test Organization
//!
//! 1. **Argsort** - Basic, sorted, reversed input
//! 2. **Ties** - Deterministic tie-breaking by original index
//! 3. **Buffer Reuse** - Output vectors are overwritten, not appended
//! 4. **Sort & Gather** - sort_ascending and permute_into

use wasserstein::internals::primitives::sorting::{
    argsort_into, ascending, permute_into, sort_ascending,
};

fn argsort(values: &[f64]) -> Vec<usize> {
    let mut perm = Vec::new();
    argsort_into(values, &mut perm);
    perm
}

// ============================================================================
// Argsort Tests
// ============================================================================

/// Test argsort with simple unsorted data.
#[test]
fn test_argsort_basic() {
    let values = vec![3.0, 1.0, 4.0, 2.0];

    assert_eq!(argsort(&values), vec![1, 3, 0, 2]);
}

/// Test argsort with already sorted data (identity fast path).
#[test]
fn test_argsort_already_sorted() {
    let values = vec![1.0, 2.0, 3.0, 4.0];

    assert_eq!(argsort(&values), vec![0, 1, 2, 3]);
}

/// Test argsort with reverse sorted data.
#[test]
fn test_argsort_reverse_order() {
    let values = vec![4.0, 3.0, 2.0, 1.0];

    assert_eq!(argsort(&values), vec![3, 2, 1, 0]);
}

/// Test argsort with negative values.
#[test]
fn test_argsort_negative_values() {
    let values = vec![-1.5, 2.0, -7.25, 0.0];

    assert_eq!(argsort(&values), vec![2, 0, 3, 1]);
}

/// Test argsort of a single value and of no values.
#[test]
fn test_argsort_trivial_inputs() {
    assert_eq!(argsort(&[42.0]), vec![0]);
    assert!(argsort(&[]).is_empty());
}

// ============================================================================
// Tie-Breaking Tests
// ============================================================================

/// Test that equal values keep ascending original index order.
#[test]
fn test_argsort_ties_by_original_index() {
    let values = vec![2.0, 1.0, 2.0, 1.0];

    // First 1.0 (index 1) before second 1.0 (index 3), same for 2.0
    assert_eq!(argsort(&values), vec![1, 3, 0, 2]);
}

/// Test that all-equal values give the identity permutation.
#[test]
fn test_argsort_all_equal() {
    let values = vec![5.0; 6];

    assert_eq!(argsort(&values), vec![0, 1, 2, 3, 4, 5]);
}

// ============================================================================
// Buffer Reuse Tests
// ============================================================================

/// Test that argsort_into overwrites a previously used buffer.
#[test]
fn test_argsort_into_reuses_buffer() {
    let mut perm = Vec::new();

    argsort_into(&[9.0, 8.0, 7.0, 6.0, 5.0], &mut perm);
    assert_eq!(perm, vec![4, 3, 2, 1, 0]);

    argsort_into(&[2.0, 1.0], &mut perm);
    assert_eq!(perm, vec![1, 0], "Stale entries must not survive");
}

// ============================================================================
// Sort & Gather Tests
// ============================================================================

/// Test ascending in-place sort keeps duplicates.
#[test]
fn test_sort_ascending_keeps_duplicates() {
    let mut values = vec![4.5, 1.4, 3.4, 1.4, 7.8];
    sort_ascending(&mut values);

    assert_eq!(values, vec![1.4, 1.4, 3.4, 4.5, 7.8]);
}

/// Test gathering values and weights through a permutation.
#[test]
fn test_permute_into_follows_permutation() {
    let values = vec![4.5, 1.4];
    let weights = vec![3.2, 3.5];
    let perm = argsort(&values);

    let mut sorted = Vec::new();
    permute_into(&values, &perm, &mut sorted);
    assert_eq!(sorted, vec![1.4, 4.5]);

    permute_into(&weights, &perm, &mut sorted);
    assert_eq!(sorted, vec![3.5, 3.2], "Weights follow their values");
}

// ============================================================================
// NaN Ordering Tests
// ============================================================================

/// Test that NaN compares after every number, including infinity.
#[test]
fn test_ascending_orders_nan_last() {
    use std::cmp::Ordering;

    assert_eq!(ascending(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    assert_eq!(ascending(&f64::NEG_INFINITY, &f64::NAN), Ordering::Less);
    assert_eq!(ascending(&f64::NAN, &f64::NAN), Ordering::Equal);
    assert_eq!(ascending(&1.0, &2.0), Ordering::Less);
}

/// Test that argsort moves NaN samples to the end and keeps their input order.
#[test]
fn test_argsort_nan_last() {
    let values = vec![3.0, f64::NAN, 1.0, f64::NAN, 2.0];

    assert_eq!(argsort(&values), vec![2, 4, 0, 1, 3]);
}

/// Test sorting many interleaved NaNs completes with numbers first.
#[test]
fn test_sort_ascending_interleaved_nan() {
    let mut values: Vec<f64> = (0..200)
        .map(|i| if i % 3 == 0 { f64::NAN } else { ((i * 37) % 101) as f64 })
        .collect();
    let nan_count = values.iter().filter(|v| v.is_nan()).count();

    sort_ascending(&mut values);

    let (numbers, nans) = values.split_at(values.len() - nan_count);
    assert!(numbers.windows(2).all(|w| w[0] <= w[1]));
    assert!(nans.iter().all(|v| v.is_nan()));
}
