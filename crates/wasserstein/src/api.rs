//! High-level API for 1-D Wasserstein distances.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: two stateless functions
//! for one-off distances and a fluent builder producing a reusable calculator
//! for hot loops.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builder misuse is reported when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Allocation-aware**: The calculator owns its working buffers and reuses them.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WassersteinBuilder`] via `Wasserstein::new()`.
//! 2. Chain configuration methods (`.check_finite()`, `.capacity()`).
//! 3. Call `.build()` to get a [`WassersteinCalculator`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ExecutorConfig, WassersteinExecutor};
use crate::engine::validator::Validator;
use crate::primitives::buffer::DistanceBuffer;

// Publicly re-exported types
pub use crate::engine::output::WassersteinResult;
pub use crate::primitives::distribution::Distribution;
pub use crate::primitives::errors::WassersteinError;

// ============================================================================
// Free Functions
// ============================================================================

/// 1-Wasserstein distance between two sets of equally weighted samples.
///
/// ```rust
/// use wasserstein::prelude::*;
///
/// let d = wasserstein(&[0.0_f64, 1.0, 3.0], &[5.0, 6.0, 8.0])?;
/// assert!((d - 5.0).abs() < 1e-12);
/// # Result::<(), WassersteinError>::Ok(())
/// ```
pub fn wasserstein<T: Float>(u_values: &[T], v_values: &[T]) -> Result<T, WassersteinError> {
    WassersteinExecutor::execute(
        &Distribution::new(u_values),
        &Distribution::new(v_values),
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    )
}

/// 1-Wasserstein distance between two weighted sample sets.
///
/// Each side is normalized by its own total weight.
pub fn wasserstein_weighted<T: Float>(
    u_values: &[T],
    u_weights: &[T],
    v_values: &[T],
    v_weights: &[T],
) -> Result<T, WassersteinError> {
    WassersteinExecutor::execute(
        &Distribution::weighted(u_values, u_weights),
        &Distribution::weighted(v_values, v_weights),
        ExecutorConfig::default(),
        &mut DistanceBuffer::default(),
    )
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a reusable distance calculator.
#[derive(Debug, Clone)]
pub struct WassersteinBuilder<T> {
    /// Scan sample values for NaN/Inf before computing (default: true).
    pub check_finite: Option<bool>,

    /// Combined sample count to pre-allocate working buffers for (default: 0).
    pub capacity: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Parallel execution hint (read by extension crates).
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for WassersteinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WassersteinBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            check_finite: None,
            capacity: None,
            parallel: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    // Record the first parameter that is configured twice.
    fn mark(&mut self, parameter: &'static str, already_set: bool) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    /// Enable or disable the NaN/Inf scan of sample values.
    pub fn check_finite(mut self, enabled: bool) -> Self {
        self.mark("check_finite", self.check_finite.is_some());
        self.check_finite = Some(enabled);
        self
    }

    /// Pre-allocate buffers for distributions totalling `n` sample points.
    pub fn capacity(mut self, n: usize) -> Self {
        self.mark("capacity", self.capacity.is_some());
        self.capacity = Some(n);
        self
    }

    /// Set the parallel execution hint used by extension crates.
    #[doc(hidden)]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.mark("parallel", self.parallel.is_some());
        self.parallel = Some(enabled);
        self
    }

    /// Resolve the executor settings from this builder.
    #[doc(hidden)]
    pub fn config(&self) -> ExecutorConfig {
        ExecutorConfig {
            check_finite: self.check_finite.unwrap_or(true),
        }
    }

    /// Validate the configuration and build the calculator.
    pub fn build(self) -> Result<WassersteinCalculator<T>, WassersteinError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(WassersteinCalculator {
            config: self.config(),
            buffer: DistanceBuffer::with_capacity(self.capacity.unwrap_or(0)),
        })
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// A configured distance calculator that reuses its working memory.
///
/// ```rust
/// use wasserstein::prelude::*;
///
/// let mut calc = Wasserstein::new().capacity(6).build()?;
///
/// let a = [3.4_f64, 3.9, 7.5, 7.8];
/// let b = [4.5, 1.4];
/// let d = calc.distance(&a, &b)?;
/// assert!((d - 2.7).abs() < 1e-12);
/// # Result::<(), WassersteinError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct WassersteinCalculator<T> {
    config: ExecutorConfig,
    buffer: DistanceBuffer<T>,
}

impl<T: Float> WassersteinCalculator<T> {
    /// Distance between two sets of equally weighted samples.
    pub fn distance(&mut self, u_values: &[T], v_values: &[T]) -> Result<T, WassersteinError> {
        self.compare(&Distribution::new(u_values), &Distribution::new(v_values))
    }

    /// Distance between two weighted sample sets.
    pub fn distance_weighted(
        &mut self,
        u_values: &[T],
        u_weights: &[T],
        v_values: &[T],
        v_weights: &[T],
    ) -> Result<T, WassersteinError> {
        self.compare(
            &Distribution::weighted(u_values, u_weights),
            &Distribution::weighted(v_values, v_weights),
        )
    }

    /// Distance between two distributions, weighted or not.
    pub fn compare(
        &mut self,
        u: &Distribution<'_, T>,
        v: &Distribution<'_, T>,
    ) -> Result<T, WassersteinError> {
        WassersteinExecutor::execute(u, v, self.config, &mut self.buffer)
    }

    /// One distance per pair, validating every pair before computing any.
    pub fn compare_many(
        &mut self,
        pairs: &[(Distribution<'_, T>, Distribution<'_, T>)],
    ) -> Result<Vec<T>, WassersteinError> {
        WassersteinExecutor::execute_many(pairs, self.config, &mut self.buffer)
    }

    /// Distance together with the merged support, interval widths and CDFs.
    pub fn profile(
        &mut self,
        u: &Distribution<'_, T>,
        v: &Distribution<'_, T>,
    ) -> Result<WassersteinResult<T>, WassersteinError> {
        WassersteinExecutor::execute_profile(u, v, self.config, &mut self.buffer)
    }

    /// Whether sample values are scanned for NaN/Inf.
    pub fn checks_finite(&self) -> bool {
        self.config.check_finite
    }
}
