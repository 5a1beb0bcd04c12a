//! Top-left skyline packer
//!
//! Maintains one filled height per column and always extends the packing
//! at the lowest, leftmost open cell. Any exact tiling contains the piece
//! covering that cell flush against it, so trying every free entry of the
//! piece list at the anchor and backtracking in last-in-first-out order
//! visits every exact packing exactly once.

use crate::board::grid::{Board, Tiling};
use crate::board::rect::Rect;
use crate::pack::pieces::PieceList;

/// Placement state of one piece-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Entry may still be placed.
    Free,
    /// Entry is on the board; `order` is its 1-based placement rank.
    Placed { order: usize },
    /// The other orientation of this entry is on the board.
    Blocked,
}

/// One accepted placement, newest last on the undo stack.
#[derive(Debug, Clone, Copy)]
struct Placement {
    index: usize,
    col: usize,
    row: usize,
}

struct Packer<'a> {
    board: Board,
    pieces: &'a PieceList,
    skyline: Vec<usize>,
    slots: Vec<Slot>,
    placed: Vec<Placement>,
}

/// Pack the doubled piece list into `board`, or report that no exact
/// packing exists.
pub fn pack(board: Board, pieces: &PieceList) -> Option<Tiling> {
    debug_assert!(!pieces.is_empty(), "candidate subsets hold at least one piece");
    debug_assert_eq!(
        pieces.total_area(),
        board.area(),
        "piece areas must sum to the board area"
    );

    let mut packer = Packer {
        board,
        pieces,
        skyline: vec![0; board.cols],
        slots: vec![Slot::Free; pieces.len()],
        placed: Vec::with_capacity(pieces.pieces()),
    };
    packer.search().then(|| packer.into_tiling())
}

impl Packer<'_> {
    /// Depth-first search over placements at successive anchors.
    ///
    /// `cursor` remembers where the scan over the piece list resumes: it
    /// restarts at zero after every placement and continues just past the
    /// undone entry after every backtrack, so no alternative is revisited.
    fn search(&mut self) -> bool {
        let mut cursor = 0;
        loop {
            if self.placed.len() == self.pieces.pieces() {
                return true;
            }
            let (col, row) = self.anchor();
            if let Some(index) = self.next_fit(cursor, col, row) {
                self.place(index, col, row);
                cursor = 0;
            } else {
                let Some(last) = self.placed.pop() else {
                    return false;
                };
                self.remove(last);
                cursor = last.index + 1;
            }
        }
    }

    /// Lowest filled height, leftmost column among ties.
    fn anchor(&self) -> (usize, usize) {
        let mut best_col = 0;
        let mut best_row = usize::MAX;
        for (col, &height) in self.skyline.iter().enumerate() {
            if height < best_row {
                best_row = height;
                best_col = col;
            }
        }
        (best_col, best_row)
    }

    /// First free entry at or after `cursor` that fits at the anchor.
    ///
    /// While the board is empty, square boards only offer the first half
    /// of the list: the transpose of any tiling that opens with a rotated
    /// orientation opens with the given one, so the restriction discards
    /// mirrored duplicates and nothing else.
    fn next_fit(&self, cursor: usize, col: usize, row: usize) -> Option<usize> {
        let limit = if self.placed.is_empty() && self.board.is_square() {
            self.pieces.pieces()
        } else {
            self.pieces.len()
        };
        (cursor..limit).find(|&index| {
            matches!(self.slots.get(index), Some(Slot::Free))
                && self.pieces.get(index).is_some_and(|rect| self.fits(&rect, col, row))
        })
    }

    /// In bounds, and no footprint column already filled above the anchor.
    ///
    /// The anchor row is the global skyline minimum, so the height check
    /// also guarantees the piece sits flush on every column it covers.
    fn fits(&self, rect: &Rect, col: usize, row: usize) -> bool {
        col + rect.width <= self.board.cols
            && row + rect.height <= self.board.rows
            && self
                .skyline
                .iter()
                .skip(col)
                .take(rect.width)
                .all(|&height| height <= row)
    }

    fn place(&mut self, index: usize, col: usize, row: usize) {
        let Some(rect) = self.pieces.get(index) else {
            return;
        };
        let order = self.placed.len() + 1;
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Placed { order };
        }
        let twin = self.pieces.twin(index);
        if let Some(slot) = self.slots.get_mut(twin) {
            *slot = Slot::Blocked;
        }
        let top = row + rect.height;
        for height in self.skyline.iter_mut().skip(col).take(rect.width) {
            debug_assert_eq!(*height, row, "placements sit flush on the skyline");
            *height = top;
        }
        self.placed.push(Placement { index, col, row });
    }

    /// Undo the most recent placement, restoring the exact prior state.
    fn remove(&mut self, placement: Placement) {
        debug_assert!(
            matches!(
                self.slots.get(placement.index),
                Some(Slot::Placed { order }) if *order == self.placed.len() + 1
            ),
            "undo targets the most recent placement"
        );
        let Some(rect) = self.pieces.get(placement.index) else {
            return;
        };
        let top = placement.row + rect.height;
        for height in self.skyline.iter_mut().skip(placement.col).take(rect.width) {
            debug_assert_eq!(*height, top, "skyline still carries the undone placement");
            *height = placement.row;
        }
        if let Some(slot) = self.slots.get_mut(placement.index) {
            *slot = Slot::Free;
        }
        let twin = self.pieces.twin(placement.index);
        if let Some(slot) = self.slots.get_mut(twin) {
            *slot = Slot::Free;
        }
    }

    /// Stamp the completed placement stack into a grid.
    fn into_tiling(self) -> Tiling {
        let mut tiling = Tiling::empty(self.board);
        for placement in &self.placed {
            if let Some(rect) = self.pieces.get(placement.index) {
                let owner = self.pieces.piece_of(placement.index) + 1;
                tiling.stamp(owner as u16, placement.col, placement.row, &rect);
            }
        }
        tiling
    }
}
