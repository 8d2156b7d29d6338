//! # Wasserstein (Exact 1-D Earth Mover's Distance)
//!
//! Computes the 1-Wasserstein (earth mover's) distance between two finite,
//! one-dimensional empirical distributions, given either as plain samples or as
//! (value, weight) pairs.
//!
//! ## What is the 1-D Wasserstein distance?
//!
//! In one dimension the optimal transport cost between two distributions `u` and
//! `v` has a closed form: the area between their cumulative distribution
//! functions,
//!
//! ```text
//! W1(u, v) = ∫ |F_u(x) - F_v(x)| dx
//! ```
//!
//! Empirical CDFs are step functions, so the integral is an exact finite sum over
//! the intervals between consecutive points of the merged support.
//!
//! ## Quick Start
//!
//! ### Unweighted samples
//!
//! ```rust
//! use wasserstein::prelude::*;
//!
//! let a = vec![3.4_f64, 3.9, 7.5, 7.8];
//! let b = vec![4.5, 1.4];
//!
//! let d = wasserstein(&a, &b)?;
//! assert!((d - 2.7).abs() < 1e-12);
//! # Result::<(), WassersteinError>::Ok(())
//! ```
//!
//! ### Weighted samples
//!
//! Every distribution is normalized by its own total weight, so only relative
//! weights matter.
//!
//! ```rust
//! use wasserstein::prelude::*;
//!
//! let a = vec![3.4_f64, 3.9, 7.5, 7.8];
//! let aw = vec![1.4, 0.9, 3.1, 7.2];
//! let b = vec![4.5, 1.4];
//! let bw = vec![3.2, 3.5];
//!
//! let d = wasserstein_weighted(&a, &aw, &b, &bw)?;
//! assert!((d - 4.078133143804786).abs() < 1e-12);
//! # Result::<(), WassersteinError>::Ok(())
//! ```
//!
//! ### Reusable calculator
//!
//! For hot loops, build a calculator once; it keeps its working buffers between
//! calls.
//!
//! ```rust
//! use wasserstein::prelude::*;
//!
//! let mut calc = Wasserstein::new()
//!     .check_finite(true) // Reject NaN/Inf sample values
//!     .capacity(64)       // Pre-allocate for 64 combined points
//!     .build()?;
//!
//! let u = Distribution::new(&[0.0_f64, 1.0]);
//! let v = Distribution::weighted(&[5.0, 6.0], &[1.0, 1.0]);
//!
//! let result = calc.profile(&u, &v)?;
//! println!("{}", result);
//! assert!((result.distance - 5.0).abs() < 1e-12);
//! # Result::<(), WassersteinError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Support points: 4
//!   Intervals:      3
//!   Distance:       5
//!
//! CDF Profile:
//!       Left      Width      CDF_u      CDF_v Contribution
//! --------------------------------------------------------
//!     0.0000     1.0000   0.500000   0.000000     0.500000
//!     1.0000     4.0000   1.000000   0.000000     4.000000
//!     5.0000     1.0000   1.000000   0.500000     0.500000
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<T, WassersteinError>`. Inputs are validated
//! before anything is computed:
//!
//! - **`EmptyDistribution`**: a side has no sample points.
//! - **`InconsistentWeights`**: `values` and `weights` differ in length.
//! - **`InvalidWeights`**: a negative/non-finite weight, or a non-positive total.
//! - **`InvalidNumericValue`**: a NaN/infinite sample (when `check_finite` is on).
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! wasserstein = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Villani, C. (2009). "Optimal Transport: Old and New"
//! - Ramdas, A., Garcia, N., Cuturi, M. (2017). "On Wasserstein Two Sample Testing and Related Families of Nonparametric Tests"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure pipeline stages.
mod math;

// Layer 3: Engine - validation and pipeline execution.
mod engine;

// High-level API: entry points, builder and calculator.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Distribution, WassersteinBuilder as Wasserstein, WassersteinCalculator, WassersteinError,
        WassersteinResult, wasserstein, wasserstein_weighted,
    };
}

pub use api::{wasserstein, wasserstein_weighted};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
