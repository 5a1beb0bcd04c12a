//! End-to-end solve pipeline

/// Validation, candidate enumeration, and the packing race in one call
pub mod solve;
