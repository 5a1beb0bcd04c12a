//! Board dimensions and exactly tiled solution grids
//!
//! A `Tiling` is the grid of owner ids produced by a successful packing.
//! Owner ids are 1-based; `0` marks an uncovered tile and never survives a
//! valid exact cover.

use std::fmt;

use ndarray::Array2;

use crate::board::rect::Rect;

/// Board dimensions in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Number of columns (horizontal extent)
    pub cols: usize,
    /// Number of rows (vertical extent)
    pub rows: usize,
}

impl Board {
    /// Create a board from its column and row counts
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Create a square board
    pub const fn square(side: usize) -> Self {
        Self {
            cols: side,
            rows: side,
        }
    }

    /// Total number of tiles
    pub const fn area(&self) -> usize {
        self.cols * self.rows
    }

    /// Whether the board is square (enables the packer's symmetry break)
    pub const fn is_square(&self) -> bool {
        self.cols == self.rows
    }

    /// Whether at least one orientation of the shape fits the board
    pub const fn admits(&self, rect: &Rect) -> bool {
        rect.fits(self.cols, self.rows) || rect.rotated().fits(self.cols, self.rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Solution grid of rectangle-owner ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiling {
    grid: Array2<u16>,
}

impl Tiling {
    /// Create an uncovered grid for the given board
    pub fn empty(board: Board) -> Self {
        Self {
            grid: Array2::zeros((board.rows, board.cols)),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.grid.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.grid.ncols()
    }

    /// The full owner-id grid, indexed `[row, col]`
    pub const fn grid(&self) -> &Array2<u16> {
        &self.grid
    }

    /// Owner id at a position, if in bounds
    pub fn owner(&self, col: usize, row: usize) -> Option<u16> {
        self.grid.get([row, col]).copied()
    }

    /// Write one placed rectangle's footprint.
    ///
    /// Callers guarantee the footprint is in bounds; placement generation
    /// never emits anything else.
    pub(crate) fn stamp(&mut self, owner: u16, col: usize, row: usize, rect: &Rect) {
        debug_assert!(
            col + rect.width <= self.cols() && row + rect.height <= self.rows(),
            "stamp footprint out of bounds"
        );

        for r in row..row + rect.height {
            for c in col..col + rect.width {
                if let Some(cell) = self.grid.get_mut([r, c]) {
                    *cell = owner;
                }
            }
        }
    }

    /// Check that the grid is a valid exact cover of the board by `pieces`.
    ///
    /// Every tile must carry exactly one owner id in `1..=pieces.len()`,
    /// and the tiles of each owner must form one axis-aligned rectangle
    /// congruent to the piece with that id.
    pub fn verify(&self, pieces: &[Rect]) -> bool {
        let count = pieces.len();
        if count == 0 || count > usize::from(u16::MAX) {
            return false;
        }

        let mut min_row = vec![usize::MAX; count];
        let mut max_row = vec![0_usize; count];
        let mut min_col = vec![usize::MAX; count];
        let mut max_col = vec![0_usize; count];
        let mut tiles = vec![0_usize; count];

        for ((row, col), &owner) in self.grid.indexed_iter() {
            if owner == 0 {
                return false;
            }
            let index = usize::from(owner) - 1;
            let Some(seen) = tiles.get_mut(index) else {
                return false;
            };
            *seen += 1;

            if let Some(value) = min_row.get_mut(index) {
                *value = (*value).min(row);
            }
            if let Some(value) = max_row.get_mut(index) {
                *value = (*value).max(row);
            }
            if let Some(value) = min_col.get_mut(index) {
                *value = (*value).min(col);
            }
            if let Some(value) = max_col.get_mut(index) {
                *value = (*value).max(col);
            }
        }

        for (index, piece) in pieces.iter().enumerate() {
            let seen = tiles.get(index).copied().unwrap_or(0);
            if seen == 0 {
                return false;
            }

            let lo_row = min_row.get(index).copied().unwrap_or(usize::MAX);
            let hi_row = max_row.get(index).copied().unwrap_or(0);
            let lo_col = min_col.get(index).copied().unwrap_or(usize::MAX);
            let hi_col = max_col.get(index).copied().unwrap_or(0);

            let height = hi_row - lo_row + 1;
            let width = hi_col - lo_col + 1;

            // A bounding box filled by exactly `seen` tiles of one owner is
            // a solid rectangle
            if width * height != seen {
                return false;
            }
            if !Rect::new(width, height).congruent(piece) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Tiling};
    use crate::board::rect::Rect;

    #[test]
    fn board_admission_allows_either_orientation() {
        let board = Board::new(5, 3);
        assert!(board.admits(&Rect::new(1, 5)));
        assert!(board.admits(&Rect::new(5, 3)));
        assert!(!board.admits(&Rect::new(4, 4)));
    }

    #[test]
    fn stamped_partition_verifies() {
        let board = Board::square(3);
        let pieces = vec![Rect::new(2, 2), Rect::new(1, 3), Rect::new(2, 1)];

        let mut tiling = Tiling::empty(board);
        tiling.stamp(1, 0, 0, &Rect::new(2, 2));
        tiling.stamp(2, 2, 0, &Rect::new(1, 3));
        tiling.stamp(3, 0, 2, &Rect::new(2, 1));

        assert!(tiling.verify(&pieces));
    }

    #[test]
    fn uncovered_tile_fails_verification() {
        let board = Board::square(2);
        let mut tiling = Tiling::empty(board);
        tiling.stamp(1, 0, 0, &Rect::new(2, 1));

        assert!(!tiling.verify(&[Rect::new(2, 1), Rect::new(2, 1)]));
    }

    #[test]
    fn split_owner_region_fails_verification() {
        let board = Board::new(3, 1);
        let mut tiling = Tiling::empty(board);
        tiling.stamp(1, 0, 0, &Rect::new(1, 1));
        tiling.stamp(2, 1, 0, &Rect::new(1, 1));
        tiling.stamp(1, 2, 0, &Rect::new(1, 1));

        // Owner 1 occupies two disconnected tiles
        assert!(!tiling.verify(&[Rect::new(2, 1), Rect::new(1, 1)]));
    }

    #[test]
    fn dimension_mismatch_fails_verification() {
        let board = Board::new(4, 1);
        let mut tiling = Tiling::empty(board);
        tiling.stamp(1, 0, 0, &Rect::new(4, 1));

        assert!(!tiling.verify(&[Rect::new(2, 2)]));
    }
}
