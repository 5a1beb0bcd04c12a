//! Mathematical utilities for catalog enumeration

/// Integer square roots and divisor-pair enumeration
pub mod divisors;
