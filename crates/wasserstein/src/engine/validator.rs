//! Input validation for distributions and configuration.
//!
//! ## Purpose
//!
//! This module checks every precondition of the distance pipeline before any
//! computation starts, so a call either succeeds completely or fails without
//! producing output.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape**: at least one sample; as many weights as values.
//! * **Weights**: each weight finite and `>= 0`, total strictly positive.
//! * **Finite Checks**: optional scan of sample values for NaN/Inf.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::distribution::Distribution;
use crate::primitives::errors::WassersteinError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for distributions and builder configuration.
///
/// All methods return `Result<(), WassersteinError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Distribution Validation
    // ========================================================================

    /// Validate both sides of a distance computation.
    pub fn validate_pair<T: Float>(
        u: &Distribution<'_, T>,
        v: &Distribution<'_, T>,
        check_finite: bool,
    ) -> Result<(), WassersteinError> {
        Self::validate_distribution(u, "first", check_finite)?;
        Self::validate_distribution(v, "second", check_finite)
    }

    /// Validate a single distribution; `side` names it in error messages.
    pub fn validate_distribution<T: Float>(
        dist: &Distribution<'_, T>,
        side: &str,
        check_finite: bool,
    ) -> Result<(), WassersteinError> {
        // Check 1: Non-empty
        if dist.is_empty() {
            return Err(WassersteinError::EmptyDistribution { side: side.into() });
        }

        // Check 2: Matching weight length
        if let Some(weights) = dist.weights() {
            if weights.len() != dist.len() {
                return Err(WassersteinError::InconsistentWeights {
                    side: side.into(),
                    values: dist.len(),
                    weights: weights.len(),
                });
            }
        }

        // Check 3: Finite sample values
        if check_finite {
            Self::validate_values(dist.values(), side)?;
        }

        // Check 4: Weight signs and total
        if let Some(weights) = dist.weights() {
            Self::validate_weights(weights, side)?;
        }

        Ok(())
    }

    /// Validate that all sample values are finite.
    pub fn validate_values<T: Float>(values: &[T], side: &str) -> Result<(), WassersteinError> {
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(WassersteinError::InvalidNumericValue(format!(
                "{} values[{}]={}",
                side,
                i,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that weights are finite, non-negative and sum to a positive total.
    pub fn validate_weights<T: Float>(weights: &[T], side: &str) -> Result<(), WassersteinError> {
        let mut total = T::zero();
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < T::zero() {
                return Err(WassersteinError::InvalidWeights(format!(
                    "{} weights[{}]={} (must be finite and >= 0)",
                    side,
                    i,
                    w.to_f64().unwrap_or(f64::NAN)
                )));
            }
            total = total + w;
        }

        if !total.is_finite() || total <= T::zero() {
            return Err(WassersteinError::InvalidWeights(format!(
                "{} total weight is {} (must be > 0)",
                side,
                total.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), WassersteinError> {
        if let Some(param) = duplicate_param {
            return Err(WassersteinError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
