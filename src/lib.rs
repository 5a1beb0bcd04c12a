//! Exact solver for defect-bounded rectangle dissections (the Mondrian art problem)
//!
//! The solver enumerates every pairwise-incongruent set of rectangles whose
//! areas sum to the board area and whose area spread stays within a bound,
//! then races the sets through an exact packer until one tiles the board.

#![forbid(unsafe_code)]

/// Board geometry, the shape catalog, and solution grids
pub mod board;
/// End-to-end solve pipeline from configuration to verdict
pub mod engine;
/// Command-line interface, progress display, and error handling
pub mod io;
/// Integer utilities for divisor enumeration
pub mod math;
/// Exact packing of rectangle lists into the board
pub mod pack;
/// Concurrent racing of candidate subsets
pub mod race;
/// Area-exact subset enumeration with branch-and-bound pruning
pub mod search;

pub use io::error::{Result, SolverError};
