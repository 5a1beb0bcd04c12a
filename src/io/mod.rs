//! Command line, configuration, progress display, and error types

/// Argument parsing, the solve runner, and text rendering
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for solver configuration and reporting
pub mod error;
/// Progress reporting for the packing race
pub mod progress;
