//! Merged support and interval widths.
//!
//! The merged support is the concatenation of both distributions' values,
//! sorted ascending with duplicates kept. It is the grid on which both CDFs are
//! compared; consecutive differences give the widths of the integration
//! intervals.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::VecExt;
use crate::primitives::sorting::sort_ascending;

/// Concatenate `a` and `b` into `out` and sort ascending (duplicates kept).
#[inline]
pub fn merge_support_into<T: Float>(a: &[T], b: &[T], out: &mut Vec<T>) {
    out.assign_slice(a);
    out.extend_from_slice(b);
    sort_ascending(out);
}

/// Write `support[i + 1] - support[i]` into `out`.
///
/// A support of one point (or none) yields no intervals.
#[inline]
pub fn interval_deltas_into<T: Float>(support: &[T], out: &mut Vec<T>) {
    out.clear();
    out.extend(support.windows(2).map(|w| w[1] - w[0]));
}
