//! Batch execution engine for distance matrices.
//!
//! ## Purpose
//!
//! This module computes many independent 1-D Wasserstein distances at once:
//! full pairwise matrices, rectangular cross matrices and explicit pair lists.
//! Each distance runs the core `wasserstein` pipeline unchanged.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Buffer Reuse**: One `DistanceBuffer` per worker via `map_init`, so the
//!   working vectors are allocated once per thread rather than once per pair.
//! * **Atomic**: Every distribution is validated before the first distance is computed.
//! * **Symmetry**: Pairwise matrices evaluate only the upper triangle and mirror it.
//!
//! ## Invariants
//!
//! * Parallel and sequential execution produce bit-identical results.
//! * Pairwise matrices are symmetric with a zero diagonal.
//!
//! ## Non-goals
//!
//! * This module does not implement the distance itself (handled by `wasserstein`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use ndarray::Array2;
use num_traits::Float;

// Export dependencies from wasserstein crate
use wasserstein::internals::engine::executor::{ExecutorConfig, WassersteinExecutor};
use wasserstein::internals::engine::validator::Validator;
use wasserstein::internals::primitives::buffer::DistanceBuffer;
use wasserstein::internals::primitives::distribution::Distribution;
use wasserstein::internals::primitives::errors::WassersteinError;

// ============================================================================
// Validation
// ============================================================================

/// Validate every distribution of a batch; `label` prefixes the index in errors.
pub fn validate_batch<T: Float>(
    dists: &[Distribution<'_, T>],
    label: &str,
    config: ExecutorConfig,
) -> Result<(), WassersteinError> {
    for (i, dist) in dists.iter().enumerate() {
        let side = format!("{label} {i}");
        if let Err(err) = Validator::validate_distribution(dist, &side, config.check_finite) {
            tracing::debug!(index = i, batch = label, error = %err, "rejected batch input");
            return Err(err);
        }
    }
    Ok(())
}

// ============================================================================
// Batch Passes
// ============================================================================

/// Distances for index pairs `(i, j)` between `rows[i]` and `cols[j]`.
///
/// Inputs must already be validated.
pub fn pair_distances<T>(
    rows: &[Distribution<'_, T>],
    cols: &[Distribution<'_, T>],
    pairs: &[(usize, usize)],
    parallel: bool,
) -> Vec<T>
where
    T: Float + Send + Sync,
{
    #[cfg(feature = "cpu")]
    {
        if parallel {
            return pairs
                .par_iter()
                .map_init(DistanceBuffer::default, |buffer, &(i, j)| {
                    WassersteinExecutor::run(&rows[i], &cols[j], buffer)
                })
                .collect();
        }
    }

    #[cfg(not(feature = "cpu"))]
    let _ = parallel;

    let mut buffer = DistanceBuffer::default();
    pairs
        .iter()
        .map(|&(i, j)| WassersteinExecutor::run(&rows[i], &cols[j], &mut buffer))
        .collect()
}

/// Symmetric `n x n` matrix of distances between all distributions.
pub fn pairwise_pass<T>(dists: &[Distribution<'_, T>], parallel: bool) -> Array2<T>
where
    T: Float + Send + Sync,
{
    let n = dists.len();

    // Upper triangle only; the diagonal stays zero
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();
    let values = pair_distances(dists, dists, &pairs, parallel);

    let mut matrix = Array2::zeros((n, n));
    for (&(i, j), &d) in pairs.iter().zip(&values) {
        matrix[[i, j]] = d;
        matrix[[j, i]] = d;
    }
    matrix
}

/// `rows.len() x cols.len()` matrix with entry `(i, j) = W1(rows[i], cols[j])`.
pub fn cross_pass<T>(
    rows: &[Distribution<'_, T>],
    cols: &[Distribution<'_, T>],
    parallel: bool,
) -> Result<Array2<T>, WassersteinError>
where
    T: Float + Send + Sync,
{
    let (r, c) = (rows.len(), cols.len());
    let pairs: Vec<(usize, usize)> = (0..r)
        .flat_map(|i| (0..c).map(move |j| (i, j)))
        .collect();
    let values = pair_distances(rows, cols, &pairs, parallel);

    Array2::from_shape_vec((r, c), values)
        .map_err(|e| WassersteinError::InvalidInput(e.to_string()))
}

/// One distance per explicit `(u, v)` pair.
pub fn pairs_pass<T>(
    pairs: &[(Distribution<'_, T>, Distribution<'_, T>)],
    parallel: bool,
) -> Vec<T>
where
    T: Float + Send + Sync,
{
    #[cfg(feature = "cpu")]
    {
        if parallel {
            return pairs
                .par_iter()
                .map_init(DistanceBuffer::default, |buffer, (u, v)| {
                    WassersteinExecutor::run(u, v, buffer)
                })
                .collect();
        }
    }

    #[cfg(not(feature = "cpu"))]
    let _ = parallel;

    let mut buffer = DistanceBuffer::default();
    pairs
        .iter()
        .map(|(u, v)| WassersteinExecutor::run(u, v, &mut buffer))
        .collect()
}
