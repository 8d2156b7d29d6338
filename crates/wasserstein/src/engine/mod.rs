//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer validates inputs and runs the distance pipeline: it composes the
//! math stages over a reusable buffer and packages detailed results.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for detailed results.
pub mod output;
