//! Board geometry, rectangle shapes, and solution grids

/// Bounds-checked enumeration of candidate rectangle shapes
pub mod catalog;
/// Board dimensions and exactly tiled solution grids
pub mod grid;
/// Rectangle shapes with rotation and congruence semantics
pub mod rect;
