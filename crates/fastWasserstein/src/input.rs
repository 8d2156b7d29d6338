//! Input abstractions for distance computations.
//!
//! ## Purpose
//!
//! This module lets the batch API accept sample values from several
//! containers (slices, vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to underlying data buffers.
//! * **Fail-fast validation**: Non-contiguous ndarray views are rejected instead of copied.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container, in order.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1, Ix2};
use num_traits::Float;

// Export dependencies from wasserstein crate
use wasserstein::internals::primitives::distribution::Distribution;
use wasserstein::internals::primitives::errors::WassersteinError;

/// Trait for containers that can provide distribution samples or weights.
pub trait WassersteinInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_wasserstein_slice(&self) -> Result<&[T], WassersteinError>;
}

impl<T: Float> WassersteinInput<T> for [T] {
    fn as_wasserstein_slice(&self) -> Result<&[T], WassersteinError> {
        Ok(self)
    }
}

impl<T: Float> WassersteinInput<T> for Vec<T> {
    fn as_wasserstein_slice(&self) -> Result<&[T], WassersteinError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> WassersteinInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_wasserstein_slice(&self) -> Result<&[T], WassersteinError> {
        self.as_slice().ok_or_else(|| {
            WassersteinError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

/// View every row of a 2-D sample matrix as an unweighted distribution.
pub fn rows_as_distributions<T, S>(
    samples: &ArrayBase<S, Ix2>,
) -> Result<Vec<Distribution<'_, T>>, WassersteinError>
where
    T: Float,
    S: Data<Elem = T>,
{
    samples
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.to_slice().map(Distribution::new).ok_or_else(|| {
                WassersteinError::InvalidInput(format!("row {i} of the sample matrix is not contiguous"))
            })
        })
        .collect()
}
