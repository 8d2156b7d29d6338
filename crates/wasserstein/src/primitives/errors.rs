//! Error types for Wasserstein distance operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while computing a
//! distance: malformed distributions, invalid weights and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the offending side and carry the relevant lengths.
//! * **Atomic**: Every error is raised during validation, before any output exists.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Wasserstein distance operations.
#[derive(Debug, Clone, PartialEq)]
pub enum WassersteinError {
    /// A distribution has no sample points; every side needs at least one.
    EmptyDistribution {
        /// Which distribution was empty (e.g., "first", "second", "distribution 3").
        side: String,
    },

    /// `values` and `weights` of one distribution differ in length.
    InconsistentWeights {
        /// Which distribution is malformed.
        side: String,
        /// Number of sample values.
        values: usize,
        /// Number of weights.
        weights: usize,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Weights are negative, non-finite, or sum to a non-positive total.
    InvalidWeights(String),

    /// Sample values contain NaN or infinite entries.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for WassersteinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyDistribution { side } => {
                write!(f, "Empty distribution: {side} has no sample points")
            }
            Self::InconsistentWeights {
                side,
                values,
                weights,
            } => {
                write!(
                    f,
                    "Inconsistent weights: {side} has {values} values but {weights} weights"
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidWeights(msg) => write!(f, "Invalid weights: {msg}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for WassersteinError {}
