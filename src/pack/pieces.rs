//! Rotation-paired rectangle lists
//!
//! The skyline packer treats each piece as two entries, one per
//! orientation, and forbids the unused orientation once its partner is
//! placed. The pairing is positional: for a subset of `r` pieces, entries
//! `0..r` hold the shapes as given and entries `r..2r` hold their
//! rotations in reverse order, so entry `k` and entry `2r - 1 - k` always
//! describe the same piece.

use crate::board::rect::Rect;

/// Packer-facing rectangle list with mirrored rotation pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceList {
    entries: Vec<Rect>,
    pieces: usize,
}

impl PieceList {
    /// Build the doubled list for one candidate subset.
    ///
    /// Squares still occupy two entries with identical shapes; the twin
    /// arithmetic stays uniform and blocking the twin of a placed square
    /// simply removes a duplicate.
    pub fn new(rects: &[Rect]) -> Self {
        let pieces = rects.len();
        let mut entries = Vec::with_capacity(pieces * 2);
        entries.extend_from_slice(rects);
        entries.extend(rects.iter().rev().map(Rect::rotated));
        Self { entries, pieces }
    }

    /// Number of distinct pieces (half the entry count).
    pub const fn pieces(&self) -> usize {
        self.pieces
    }

    /// Number of entries, counting both orientations.
    pub const fn len(&self) -> usize {
        self.pieces * 2
    }

    /// Whether the list holds no pieces at all.
    pub const fn is_empty(&self) -> bool {
        self.pieces == 0
    }

    /// Index of the other orientation of the piece behind `index`.
    ///
    /// Never equal to `index` itself, even for squares.
    pub const fn twin(&self, index: usize) -> usize {
        2 * self.pieces - 1 - index
    }

    /// Index of the piece (in `0..pieces`) that entry `index` orients.
    pub const fn piece_of(&self, index: usize) -> usize {
        if index < self.pieces {
            index
        } else {
            self.twin(index)
        }
    }

    /// Shape of one entry.
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.entries.get(index).copied()
    }

    /// Combined area of the pieces, counting each one once.
    pub fn total_area(&self) -> usize {
        self.entries
            .iter()
            .take(self.pieces)
            .map(Rect::area)
            .sum()
    }
}
