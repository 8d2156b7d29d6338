//! High-level API for batch distance computations with parallel execution.
//!
//! ## Purpose
//!
//! This module extends the `wasserstein` builder with a batch mode that
//! computes many distances at once (pairwise matrices, cross matrices, pair
//! lists), spreading the work across CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `wasserstein` builder; `.batch()` converts it.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` crate feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WassersteinBuilder`] via `Wasserstein::new()`.
//! 2. Chain configuration methods (`.check_finite()`, `.parallel()`, etc.).
//! 3. Call `.batch()` and `.build()` to get a [`BatchWasserstein`].

// External dependencies
use core::marker::PhantomData;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{cross_pass, pairs_pass, pairwise_pass, validate_batch};
use crate::input::{WassersteinInput, rows_as_distributions};

// Export dependencies from wasserstein crate
use wasserstein::internals::engine::executor::{ExecutorConfig, WassersteinExecutor};
use wasserstein::internals::engine::validator::Validator;
use wasserstein::internals::primitives::buffer::DistanceBuffer;

// Publicly re-exported types
pub use wasserstein::internals::api::{
    Distribution, WassersteinBuilder, WassersteinCalculator, WassersteinError, WassersteinResult,
    wasserstein, wasserstein_weighted,
};

// ============================================================================
// Builder Extension
// ============================================================================

/// Converts a base builder into a batch builder.
pub trait BatchExt<T> {
    /// Switch the builder to batch mode.
    fn batch(self) -> BatchWassersteinBuilder<T>;
}

impl<T: Float> BatchExt<T> for WassersteinBuilder<T> {
    fn batch(self) -> BatchWassersteinBuilder<T> {
        BatchWassersteinBuilder { base: self }
    }
}

/// Builder for batch (optionally parallel) distance computations.
#[derive(Debug, Clone)]
pub struct BatchWassersteinBuilder<T> {
    /// Base configuration shared with the single-pair calculator.
    pub base: WassersteinBuilder<T>,
}

impl<T: Float> Default for BatchWassersteinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchWassersteinBuilder<T> {
    /// Create a new batch builder with default settings.
    pub fn new() -> Self {
        Self {
            base: WassersteinBuilder::new(),
        }
    }

    /// Enable or disable the NaN/Inf scan of sample values.
    pub fn check_finite(mut self, enabled: bool) -> Self {
        self.base = self.base.check_finite(enabled);
        self
    }

    /// Enable or disable parallel execution (default: true).
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.base = self.base.parallel(enabled);
        self
    }

    /// Validate the configuration and build the batch executor.
    pub fn build(self) -> Result<BatchWasserstein<T>, WassersteinError> {
        Validator::validate_no_duplicates(self.base.duplicate_param)?;

        Ok(BatchWasserstein {
            config: self.base.config(),
            parallel: self.base.parallel.unwrap_or(true),
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Batch Executor
// ============================================================================

/// Computes many distances at once.
///
/// ```rust
/// use fastWasserstein::prelude::*;
/// use ndarray::array;
///
/// let samples = array![[0.0_f64, 1.0, 2.0], [5.0, 6.0, 7.0], [0.0, 1.0, 2.0]];
/// let batch = Wasserstein::new().batch().build()?;
///
/// let matrix = batch.pairwise_rows(&samples)?;
/// assert_eq!(matrix.dim(), (3, 3));
/// assert!((matrix[[0, 1]] - 5.0).abs() < 1e-12);
/// assert_eq!(matrix[[0, 2]], 0.0);
/// # Result::<(), WassersteinError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchWasserstein<T> {
    config: ExecutorConfig,
    parallel: bool,
    _marker: PhantomData<T>,
}

impl<T: Float + Send + Sync> BatchWasserstein<T> {
    /// Symmetric matrix of distances between every pair of distributions.
    pub fn pairwise(&self, dists: &[Distribution<'_, T>]) -> Result<Array2<T>, WassersteinError> {
        let _span = tracing::debug_span!("pairwise", n = dists.len(), parallel = self.parallel)
            .entered();

        validate_batch(dists, "distribution", self.config)?;
        let matrix = pairwise_pass(dists, self.parallel);

        tracing::debug!(rows = dists.len(), cols = dists.len(), "pairwise matrix computed");
        Ok(matrix)
    }

    /// Pairwise matrix treating each row of `samples` as an unweighted distribution.
    pub fn pairwise_rows<S>(&self, samples: &ArrayBase<S, Ix2>) -> Result<Array2<T>, WassersteinError>
    where
        S: Data<Elem = T>,
    {
        let dists = rows_as_distributions(samples)?;
        self.pairwise(&dists)
    }

    /// Matrix with entry `(i, j)` holding the distance from `rows[i]` to `cols[j]`.
    pub fn cross(
        &self,
        rows: &[Distribution<'_, T>],
        cols: &[Distribution<'_, T>],
    ) -> Result<Array2<T>, WassersteinError> {
        let _span = tracing::debug_span!(
            "cross",
            rows = rows.len(),
            cols = cols.len(),
            parallel = self.parallel
        )
        .entered();

        validate_batch(rows, "row", self.config)?;
        validate_batch(cols, "column", self.config)?;
        let matrix = cross_pass(rows, cols, self.parallel)?;

        tracing::debug!(rows = rows.len(), cols = cols.len(), "cross matrix computed");
        Ok(matrix)
    }

    /// One distance per `(u, v)` pair, in input order.
    pub fn distances(
        &self,
        pairs: &[(Distribution<'_, T>, Distribution<'_, T>)],
    ) -> Result<Vec<T>, WassersteinError> {
        let _span = tracing::debug_span!("distances", pairs = pairs.len(), parallel = self.parallel)
            .entered();

        for (i, (u, v)) in pairs.iter().enumerate() {
            if let Err(err) = Validator::validate_pair(u, v, self.config.check_finite) {
                tracing::debug!(index = i, error = %err, "rejected pair");
                return Err(err);
            }
        }

        Ok(pairs_pass(pairs, self.parallel))
    }

    /// Distance between two sample containers (slices, vectors or 1-D arrays).
    pub fn distance<U, V>(&self, u_values: &U, v_values: &V) -> Result<T, WassersteinError>
    where
        U: WassersteinInput<T> + ?Sized,
        V: WassersteinInput<T> + ?Sized,
    {
        let u = Distribution::new(u_values.as_wasserstein_slice()?);
        let v = Distribution::new(v_values.as_wasserstein_slice()?);
        WassersteinExecutor::execute(&u, &v, self.config, &mut DistanceBuffer::default())
    }

    /// Weighted distance between two sample containers.
    pub fn distance_weighted<U, UW, V, VW>(
        &self,
        u_values: &U,
        u_weights: &UW,
        v_values: &V,
        v_weights: &VW,
    ) -> Result<T, WassersteinError>
    where
        U: WassersteinInput<T> + ?Sized,
        UW: WassersteinInput<T> + ?Sized,
        V: WassersteinInput<T> + ?Sized,
        VW: WassersteinInput<T> + ?Sized,
    {
        let u = Distribution::weighted(
            u_values.as_wasserstein_slice()?,
            u_weights.as_wasserstein_slice()?,
        );
        let v = Distribution::weighted(
            v_values.as_wasserstein_slice()?,
            v_weights.as_wasserstein_slice()?,
        );
        WassersteinExecutor::execute(&u, &v, self.config, &mut DistanceBuffer::default())
    }

    /// Whether batch passes run on the rayon thread pool.
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "cpu") && self.parallel
    }
}
