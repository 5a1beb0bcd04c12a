//! Concurrent racing of candidate subsets

/// Work distribution, first-success cutoff, and deterministic reduction
pub mod scheduler;
