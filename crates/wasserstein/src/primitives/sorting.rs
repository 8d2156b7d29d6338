//! Sorting utilities for distribution samples.
//!
//! ## Purpose
//!
//! This module provides the ordering primitives the distance pipeline is built
//! on: an index permutation that sorts a distribution's values (argsort) and an
//! in-place ascending sort for the merged support.
//!
//! ## Design notes
//!
//! * **Stability**: `argsort` uses a stable sort, so equal values keep ascending
//!   original index order and results are reproducible.
//! * **Fast path**: Already-sorted input yields the identity permutation without sorting.
//! * **Buffers**: Outputs are written into caller-owned vectors so capacity is reused.
//!
//! ## Invariants
//!
//! * The permutation is a valid permutation of `0..n`.
//! * `values[perm[i]]` is non-decreasing in `i`, with NaN ordered after every number.
//!
//! ## Non-goals
//!
//! * This module does not perform data validation or distance calculation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Ordering
// ============================================================================

/// Ascending total order: numbers by value, then every NaN (all NaNs equal).
#[inline]
pub fn ascending<T: Float>(a: &T, b: &T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Write into `perm` the indices that sort `values` in ascending order.
///
/// Ties are broken by ascending original index.
#[inline]
pub fn argsort_into<T: Float>(values: &[T], perm: &mut Vec<usize>) {
    perm.clear();
    perm.extend(0..values.len());

    // Fast path: identity permutation for already sorted data
    if values.windows(2).all(|w| w[0] <= w[1]) {
        return;
    }

    // Stable sort keeps equal values in input order
    perm.sort_by(|&i, &j| ascending(&values[i], &values[j]));
}

/// Sort `values` in place in ascending order.
#[inline]
pub fn sort_ascending<T: Float>(values: &mut [T]) {
    values.sort_unstable_by(ascending);
}

/// Gather `values` through a permutation: `out[i] = values[perm[i]]`.
#[inline]
pub fn permute_into<T: Copy>(values: &[T], perm: &[usize], out: &mut Vec<T>) {
    out.clear();
    out.extend(perm.iter().map(|&i| values[i]));
}
