//! Borrowed views over one-dimensional empirical distributions.
//!
//! ## Purpose
//!
//! A [`Distribution`] pairs a slice of sample values with an optional slice of
//! non-negative weights. It owns nothing: the caller keeps the data, the view
//! only fixes how the pipeline interprets it.
//!
//! ## Key concepts
//!
//! * **Unweighted**: every sample carries the same mass `1 / len`.
//! * **Weighted**: sample `i` carries mass `weights[i] / sum(weights)`.
//!
//! ## Invariants
//!
//! * Construction never fails; lengths and weights are checked by the validator.

/// A one-dimensional empirical distribution borrowed from caller-owned slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution<'a, T> {
    values: &'a [T],
    weights: Option<&'a [T]>,
}

impl<'a, T> Distribution<'a, T> {
    /// Unweighted samples (every point has equal mass).
    #[inline]
    pub fn new(values: &'a [T]) -> Self {
        Self {
            values,
            weights: None,
        }
    }

    /// Samples paired with explicit weights of the same length.
    #[inline]
    pub fn weighted(values: &'a [T], weights: &'a [T]) -> Self {
        Self {
            values,
            weights: Some(weights),
        }
    }

    /// Sample values in input order.
    #[inline]
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// Weights in input order, if any were supplied.
    #[inline]
    pub fn weights(&self) -> Option<&'a [T]> {
        self.weights
    }

    /// Number of sample points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the distribution has no sample points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether explicit weights were supplied.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }
}

impl<'a, T> From<&'a [T]> for Distribution<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Self::new(values)
    }
}

impl<'a, T> From<(&'a [T], &'a [T])> for Distribution<'a, T> {
    fn from((values, weights): (&'a [T], &'a [T])) -> Self {
        Self::weighted(values, weights)
    }
}
