//! # fastWasserstein (Parallel 1-D Earth Mover's Distances)
//!
//! Batch extension of the [`wasserstein`] crate. It computes many 1-D
//! Wasserstein distances at once (full pairwise matrices, rectangular cross
//! matrices and explicit pair lists), spreading the work across CPU cores with
//! `rayon` and returning `ndarray` matrices.
//!
//! Every single distance is computed by the same pipeline as in `wasserstein`,
//! so batch results match the scalar API exactly.
//!
//! ## Quick Start
//!
//! ### Pairwise matrix from a sample matrix
//!
//! ```rust
//! use fastWasserstein::prelude::*;
//! use ndarray::array;
//!
//! // Each row is one set of equally weighted samples
//! let samples = array![
//!     [0.0_f64, 1.0, 2.0, 3.0],
//!     [1.0, 2.0, 3.0, 4.0],
//!     [10.0, 11.0, 12.0, 13.0],
//! ];
//!
//! let batch = Wasserstein::new()
//!     .check_finite(true) // Reject NaN/Inf sample values
//!     .parallel(true)     // Parallel by default
//!     .batch()
//!     .build()?;
//!
//! let matrix = batch.pairwise_rows(&samples)?;
//! assert!((matrix[[0, 1]] - 1.0).abs() < 1e-12);
//! assert!((matrix[[0, 2]] - 10.0).abs() < 1e-12);
//! assert_eq!(matrix[[1, 0]], matrix[[0, 1]]);
//! # Result::<(), WassersteinError>::Ok(())
//! ```
//!
//! ### Weighted distributions
//!
//! ```rust
//! use fastWasserstein::prelude::*;
//!
//! let a = [3.4_f64, 3.9, 7.5, 7.8];
//! let aw = [1.4, 0.9, 3.1, 7.2];
//! let b = [4.5, 1.4];
//! let bw = [3.2, 3.5];
//!
//! let batch = Wasserstein::new().batch().build()?;
//! let rows = [Distribution::weighted(&a, &aw)];
//! let cols = [Distribution::weighted(&b, &bw), Distribution::new(&b)];
//!
//! let matrix = batch.cross(&rows, &cols)?;
//! assert_eq!(matrix.dim(), (1, 2));
//! assert!((matrix[[0, 0]] - 4.078133143804786).abs() < 1e-12);
//! # Result::<(), WassersteinError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Every distribution of a batch is validated before the first distance is
//! computed; a single invalid input fails the whole call and no partial matrix is
//! returned. Error messages name the offending distribution by its index
//! (`"distribution 3"`, `"row 0"`, `"column 2"`).
//!
//! ## Logging
//!
//! Batch calls emit `tracing` spans and events at `DEBUG` level. Install any
//! subscriber (for example `tracing_subscriber::fmt::init()`) to see them.
//!
//! ## Feature Flags
//!
//! - **`cpu`** (default): Parallel execution with `rayon`. Without it every
//!   batch runs sequentially and `.parallel(true)` has no effect.
//! - **`dev`**: Exposes internal modules for testing.

#![allow(non_snake_case)]

// Layer 3: Engine - batch validation and parallel execution.
mod engine;

// High-level fluent API for batch distances.
mod api;

// Input data handling.
mod input;

// Standard fastWasserstein prelude.
pub mod prelude {
    pub use crate::api::{
        BatchExt, BatchWasserstein, BatchWassersteinBuilder, Distribution,
        WassersteinBuilder as Wasserstein, WassersteinCalculator, WassersteinError,
        WassersteinResult, wasserstein, wasserstein_weighted,
    };
    pub use crate::input::WassersteinInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
