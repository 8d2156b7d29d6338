//! Layer 3: Engine
//!
//! This layer provides the batch execution engine: validation of whole batches
//! and the distribution of pairwise distance computations across CPU cores.

// Batch execution engine using CPU threads
pub mod executor;
