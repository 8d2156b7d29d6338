//! Detailed output of a distance computation.
//!
//! ## Purpose
//!
//! [`WassersteinResult`] keeps the intermediate vectors a distance was derived
//! from: the merged support, the interval widths and both CDFs evaluated at the
//! left edge of every interval. It is useful for inspecting which intervals
//! dominate a distance.
//!
//! ## Invariants
//!
//! * `deltas`, `cdf_u` and `cdf_v` have `support.len() - 1` entries.
//! * `support` is sorted ascending.
//! * `distance == Σ |cdf_u[i] - cdf_v[i]| * deltas[i]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Distance together with the CDF profile it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct WassersteinResult<T> {
    /// The 1-Wasserstein distance.
    pub distance: T,

    /// Merged, sorted support of both distributions.
    pub support: Vec<T>,

    /// Interval widths `support[i + 1] - support[i]`.
    pub deltas: Vec<T>,

    /// CDF of the first distribution at the left edge of each interval.
    pub cdf_u: Vec<T>,

    /// CDF of the second distribution at the left edge of each interval.
    pub cdf_v: Vec<T>,
}

impl<T: Float> WassersteinResult<T> {
    /// Number of integration intervals.
    pub fn intervals(&self) -> usize {
        self.deltas.len()
    }

    /// Contribution `|cdf_u[i] - cdf_v[i]| * deltas[i]` of each interval.
    pub fn contributions(&self) -> Vec<T> {
        self.cdf_u
            .iter()
            .zip(&self.cdf_v)
            .zip(&self.deltas)
            .map(|((&fu, &fv), &d)| (fu - fv).abs() * d)
            .collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for WassersteinResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Support points: {}", self.support.len())?;
        writeln!(f, "  Intervals:      {}", self.intervals())?;
        writeln!(f, "  Distance:       {}", self.distance)?;
        writeln!(f)?;

        writeln!(f, "CDF Profile:")?;
        writeln!(
            f,
            "{:>10} {:>10} {:>10} {:>10} {:>12}",
            "Left", "Width", "CDF_u", "CDF_v", "Contribution"
        )?;
        writeln!(f, "{:-<width$}", "", width = 56)?;

        let contributions = self.contributions();

        // Show first 10 and last 10 rows if there are more than 20 intervals
        let n = self.intervals();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>10.4} {:>10.4} {:>10.6} {:>10.6} {:>12.6}",
                self.support[idx], self.deltas[idx], self.cdf_u[idx], self.cdf_v[idx], contributions[idx]
            )?;
        }

        Ok(())
    }
}
