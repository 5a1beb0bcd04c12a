//! Branch-and-bound subset enumeration over the catalog

/// Candidate subsets and their defect-ordered collection
pub mod candidates;
/// Depth-first enumerator with area and defect pruning
pub mod subsets;
