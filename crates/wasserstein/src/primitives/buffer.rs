//! Memory management and buffer recycling for distance computations.
//!
//! ## Purpose
//!
//! This module provides reusable workspaces that hold every intermediate vector
//! of the distance pipeline (merged support, interval widths, permutations,
//! lookup indices, cumulative weights and CDFs). Allocating them once and
//! recycling them across calls removes allocator pressure from hot loops such as
//! benchmarks or batch distance matrices.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: [`DistanceBuffer`] holds all scratch space for one
//!   pairwise computation; [`CdfBuffer`] holds the per-distribution part.
//! * **Lazy Expansion**: Buffers grow on demand via `ensure_capacity` but never shrink,
//!   stabilizing at the largest input seen.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared (e.g., `vec.clear()`), not deallocated, between calls.
//! * Capacity is monotonically increasing.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching (buffers are passed explicitly, one per thread).
//! * Dynamic shrinking or aggressive memory reclamation.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Grow the slot so that it can hold at least `n` elements without reallocating.
    #[inline]
    pub fn ensure_capacity(&mut self, n: usize) {
        if self.0.capacity() < n {
            self.0.reserve(n - self.0.len());
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Helper trait to simplify refilling vectors.
pub trait VecExt<T> {
    /// Replaces the vector contents with `slice`, reusing capacity.
    fn assign_slice(&mut self, slice: &[T]);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign_slice(&mut self, slice: &[T]) {
        self.clear();
        self.extend_from_slice(slice);
    }
}

// ============================================================================
// CdfBuffer - Per-Distribution Working Memory
// ============================================================================

/// Working memory for building one distribution's CDF over the merged support.
#[derive(Debug, Clone)]
pub struct CdfBuffer<T> {
    /// Rank permutation: `values[perm[i]]` ascends.
    pub perm: Slot<usize>,

    /// Values gathered in sorted order.
    pub sorted: Slot<T>,

    /// Per interval, the number of samples at or below its left edge.
    pub lookup: Slot<usize>,

    /// Cumulative mass in sorted order, prefixed with zero (`len + 1` entries).
    pub cumulative: Slot<T>,

    /// CDF value at the left edge of every interval.
    pub cdf: Slot<T>,
}

impl<T> Default for CdfBuffer<T> {
    fn default() -> Self {
        Self {
            perm: Slot::default(),
            sorted: Slot::default(),
            lookup: Slot::default(),
            cumulative: Slot::default(),
            cdf: Slot::default(),
        }
    }
}

impl<T> CdfBuffer<T> {
    /// Create a buffer for a distribution of `n` points over `k` support points.
    pub fn with_capacity(n: usize, k: usize) -> Self {
        Self {
            perm: Slot::new(n),
            sorted: Slot::new(n),
            lookup: Slot::new(k),
            cumulative: Slot::new(n + 1),
            cdf: Slot::new(k),
        }
    }

    /// Ensure room for a distribution of `n` points over `k` support points.
    pub fn ensure_capacity(&mut self, n: usize, k: usize) {
        self.perm.ensure_capacity(n);
        self.sorted.ensure_capacity(n);
        self.lookup.ensure_capacity(k);
        self.cumulative.ensure_capacity(n + 1);
        self.cdf.ensure_capacity(k);
    }
}

// ============================================================================
// DistanceBuffer - Working Memory for the Executor
// ============================================================================

/// Working memory for one pairwise distance computation.
#[derive(Debug, Clone)]
pub struct DistanceBuffer<T> {
    /// Merged, sorted support of both distributions.
    pub support: Slot<T>,

    /// Widths of the intervals between consecutive support points.
    pub deltas: Slot<T>,

    /// Scratch space for the first distribution.
    pub u: CdfBuffer<T>,

    /// Scratch space for the second distribution.
    pub v: CdfBuffer<T>,
}

impl<T> Default for DistanceBuffer<T> {
    fn default() -> Self {
        Self {
            support: Slot::default(),
            deltas: Slot::default(),
            u: CdfBuffer::default(),
            v: CdfBuffer::default(),
        }
    }
}

impl<T> DistanceBuffer<T> {
    /// Create a buffer pre-allocated for `total` combined sample points.
    pub fn with_capacity(total: usize) -> Self {
        Self {
            support: Slot::new(total),
            deltas: Slot::new(total),
            u: CdfBuffer::with_capacity(total, total),
            v: CdfBuffer::with_capacity(total, total),
        }
    }

    /// Prepare for distributions of `m` and `n` points.
    pub fn ensure_capacity(&mut self, m: usize, n: usize) {
        let k = m + n;
        self.support.ensure_capacity(k);
        self.deltas.ensure_capacity(k);
        self.u.ensure_capacity(m, k);
        self.v.ensure_capacity(n, k);
    }
}
