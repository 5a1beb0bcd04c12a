//! Bounds-checked enumeration of candidate rectangle shapes
//!
//! The catalog holds one entry per congruence class, canonically oriented
//! and sorted by area descending. Area-monotone ordering is what lets the
//! subset search read a provisional defect straight off the first and last
//! included indices.

use std::ops::RangeInclusive;

use crate::board::grid::Board;
use crate::board::rect::Rect;
use crate::math::divisors::divisor_pairs;

/// Ordered, read-only sequence of candidate shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Rect>,
}

impl Catalog {
    /// Enumerate the divisor pairs of every area in `areas` that fit the
    /// board in at least one orientation.
    ///
    /// Entries arrive sorted by area descending, then width descending,
    /// one canonical entry per congruence class. Shapes whose both
    /// orientations overflow the board (a 1×25 strip on a 5×5 board) are
    /// excluded here and never reach a packer.
    pub fn build(board: Board, areas: RangeInclusive<usize>) -> Self {
        let mut entries = Vec::new();
        let lo = *areas.start();
        let hi = *areas.end();

        for area in (lo..=hi).rev() {
            for (width, height) in divisor_pairs(area) {
                let rect = Rect::new(width, height);
                if board.admits(&rect) {
                    entries.push(rect);
                }
            }
        }

        Self { entries }
    }

    /// Build a catalog from explicit shapes.
    ///
    /// Shapes are canonicalized, ordered area descending then width
    /// descending, and deduplicated per congruence class. No bounds check
    /// is applied; callers own admissibility.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut entries: Vec<Rect> = rects.into_iter().map(|rect| rect.canonical()).collect();
        entries.sort_unstable_by(|a, b| {
            b.area()
                .cmp(&a.area())
                .then_with(|| b.width.cmp(&a.width))
        });
        entries.dedup();
        Self { entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no shape survived enumeration
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.entries.get(index).copied()
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[Rect] {
        &self.entries
    }
}
