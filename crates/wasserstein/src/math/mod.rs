//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical stages of the 1-D Wasserstein
//! distance: merging the support, computing interval widths, building the
//! empirical CDFs and integrating their absolute difference.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Merged support and interval widths.
pub mod support;

/// Empirical CDF construction over the merged support.
pub mod cdf;

/// Integral of the absolute CDF difference.
pub mod integral;
