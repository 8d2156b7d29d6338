//! Empirical CDF construction over the merged support.
//!
//! ## Purpose
//!
//! This module evaluates one distribution's CDF at the left edge of every
//! interval of the merged support. It runs in three steps:
//!
//! 1. **Lookup**: for each support point except the last, count the samples at
//!    or below it (an upper-bound search over the sorted values).
//! 2. **Cumulative mass**: prefix sums of the weights in sorted order, starting
//!    at zero. Unweighted samples count as one each.
//! 3. **Normalize**: divide the cumulative mass at each lookup index by the total.
//!
//! ## Invariants
//!
//! * `lookup` has one entry per interval (support length minus one).
//! * `cumulative` has `len + 1` entries and is non-decreasing for non-negative weights.
//! * Every CDF value lies in `[0, 1]`.
//!
//! ## Non-goals
//!
//! * This module does not validate weights; a non-positive total is rejected upstream.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Lookup
// ============================================================================

/// For each point of `support` except the last, write the number of elements of
/// `sorted` that are `<=` that point.
///
/// `sorted` must be ascending. A point above every sample maps to `sorted.len()`.
#[inline]
pub fn search_sorted_into<T: Float>(sorted: &[T], support: &[T], out: &mut Vec<usize>) {
    out.clear();
    let Some((_, edges)) = support.split_last() else {
        return;
    };
    out.extend(edges.iter().map(|&x| sorted.partition_point(|&v| v <= x)));
}

// ============================================================================
// Cumulative Mass
// ============================================================================

/// Write the cumulative sample count `[0, 1, ..., n]` into `out`.
#[inline]
pub fn cumulative_counts_into<T: Float>(n: usize, out: &mut Vec<T>) {
    out.clear();
    let mut acc = T::zero();
    out.push(acc);
    for _ in 0..n {
        acc = acc + T::one();
        out.push(acc);
    }
}

/// Write the cumulative weight in sorted order into `out`, prefixed with zero.
///
/// `weights` are in input order and are read through `perm`.
#[inline]
pub fn cumulative_weights_into<T: Float>(weights: &[T], perm: &[usize], out: &mut Vec<T>) {
    out.clear();
    let mut acc = T::zero();
    out.push(acc);
    for &i in perm {
        acc = acc + weights[i];
        out.push(acc);
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Write `cumulative[idx] / total` for every lookup index into `out`, where
/// `total` is the last cumulative entry.
#[inline]
pub fn evaluate_cdf_into<T: Float>(cumulative: &[T], lookup: &[usize], out: &mut Vec<T>) {
    out.clear();
    let total = cumulative.last().copied().unwrap_or_else(T::one);
    out.extend(lookup.iter().map(|&idx| cumulative[idx] / total));
}
