//! Integral of the absolute CDF difference.
//!
//! Both empirical CDFs are right-continuous step functions that are constant
//! between consecutive support points, so the 1-D Wasserstein distance
//! `∫ |F_u(x) - F_v(x)| dx` reduces to a finite sum over the intervals.

// External dependencies
use num_traits::Float;

/// Compute `Σ |cdf_u[i] - cdf_v[i]| * deltas[i]`.
///
/// All three slices have one entry per interval.
#[inline]
pub fn accumulate_distance<T: Float>(cdf_u: &[T], cdf_v: &[T], deltas: &[T]) -> T {
    cdf_u
        .iter()
        .zip(cdf_v)
        .zip(deltas)
        .fold(T::zero(), |acc, ((&fu, &fv), &d)| acc + (fu - fv).abs() * d)
}
