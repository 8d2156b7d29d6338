//! Execution engine for the 1-D Wasserstein distance pipeline.
//!
//! ## Purpose
//!
//! This module composes the math stages into one pass over a reusable
//! [`DistanceBuffer`]:
//!
//! 1. Merge and sort both supports.
//! 2. Take interval widths between consecutive support points.
//! 3. Argsort each distribution and gather its values in sorted order.
//! 4. Look up, per interval, how many samples lie at or below its left edge.
//! 5. Turn those counts into CDF values (uniform or weighted mass).
//! 6. Sum `|CDF_u - CDF_v| * width` over all intervals.
//!
//! ## Design notes
//!
//! * **Stateless**: Nothing survives a call except buffer capacity.
//! * **Validated once**: [`WassersteinExecutor::execute`] validates, then runs the
//!   unchecked pipeline; batch callers validate up front and call `run` directly.
//!
//! ## Invariants
//!
//! * After `run`, `deltas`, `u.cdf` and `v.cdf` all have `support.len() - 1` entries.
//! * The returned distance is non-negative for validated inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::WassersteinResult;
use crate::engine::validator::Validator;
use crate::math::cdf::{
    cumulative_counts_into, cumulative_weights_into, evaluate_cdf_into, search_sorted_into,
};
use crate::math::integral::accumulate_distance;
use crate::math::support::{interval_deltas_into, merge_support_into};
use crate::primitives::buffer::{CdfBuffer, DistanceBuffer};
use crate::primitives::distribution::Distribution;
use crate::primitives::errors::WassersteinError;
use crate::primitives::sorting::{argsort_into, permute_into};

// ============================================================================
// Configuration
// ============================================================================

/// Resolved execution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Scan sample values for NaN/Inf before computing.
    pub check_finite: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self { check_finite: true }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the distance pipeline.
pub struct WassersteinExecutor;

impl WassersteinExecutor {
    /// Validate both distributions, then compute their distance.
    pub fn execute<T: Float>(
        u: &Distribution<'_, T>,
        v: &Distribution<'_, T>,
        config: ExecutorConfig,
        buffer: &mut DistanceBuffer<T>,
    ) -> Result<T, WassersteinError> {
        Validator::validate_pair(u, v, config.check_finite)?;
        Ok(Self::run(u, v, buffer))
    }

    /// Validate both distributions, then compute the distance together with the
    /// support, interval widths and CDFs it was derived from.
    pub fn execute_profile<T: Float>(
        u: &Distribution<'_, T>,
        v: &Distribution<'_, T>,
        config: ExecutorConfig,
        buffer: &mut DistanceBuffer<T>,
    ) -> Result<WassersteinResult<T>, WassersteinError> {
        Validator::validate_pair(u, v, config.check_finite)?;
        let distance = Self::run(u, v, buffer);

        Ok(WassersteinResult {
            distance,
            support: buffer.support.to_vec(),
            deltas: buffer.deltas.to_vec(),
            cdf_u: buffer.u.cdf.to_vec(),
            cdf_v: buffer.v.cdf.to_vec(),
        })
    }

    /// Compute the distance of two already validated distributions.
    pub fn run<T: Float>(
        u: &Distribution<'_, T>,
        v: &Distribution<'_, T>,
        buffer: &mut DistanceBuffer<T>,
    ) -> T {
        buffer.ensure_capacity(u.len(), v.len());

        merge_support_into(u.values(), v.values(), &mut buffer.support);
        interval_deltas_into(&buffer.support, &mut buffer.deltas);

        Self::build_cdf(u, &buffer.support, &mut buffer.u);
        Self::build_cdf(v, &buffer.support, &mut buffer.v);

        accumulate_distance(&buffer.u.cdf, &buffer.v.cdf, &buffer.deltas)
    }

    // Evaluate one distribution's CDF at the left edge of every interval.
    fn build_cdf<T: Float>(dist: &Distribution<'_, T>, support: &[T], cdf: &mut CdfBuffer<T>) {
        argsort_into(dist.values(), &mut cdf.perm);
        permute_into(dist.values(), &cdf.perm, &mut cdf.sorted);
        search_sorted_into(&cdf.sorted, support, &mut cdf.lookup);

        match dist.weights() {
            Some(weights) => cumulative_weights_into(weights, &cdf.perm, &mut cdf.cumulative),
            None => cumulative_counts_into(dist.len(), &mut cdf.cumulative),
        }

        evaluate_cdf_into(&cdf.cumulative, &cdf.lookup, &mut cdf.cdf);
    }

    /// Compute one distance per pair with a single shared buffer.
    ///
    /// Every pair is validated before the first distance is computed.
    pub fn execute_many<T: Float>(
        pairs: &[(Distribution<'_, T>, Distribution<'_, T>)],
        config: ExecutorConfig,
        buffer: &mut DistanceBuffer<T>,
    ) -> Result<Vec<T>, WassersteinError> {
        for (u, v) in pairs {
            Validator::validate_pair(u, v, config.check_finite)?;
        }
        Ok(pairs.iter().map(|(u, v)| Self::run(u, v, buffer)).collect())
    }
}
