//! Exact-cover formulation and dancing-links search
//!
//! A packing instance becomes a 0/1 matrix with one column per board
//! tile, one column per piece, and one row per legal placement of one
//! piece orientation. An exact cover of the columns is precisely a
//! packing that fills every tile and uses every piece once. The search
//! is Knuth's Algorithm X over circular doubly linked column lists:
//! covering a column unlinks it and every row that intersects it, and
//! uncovering relinks in exact reverse order, so backtracking restores
//! the structure bit for bit.

use crate::board::grid::{Board, Tiling};
use crate::board::rect::Rect;

/// One matrix row: a specific orientation of a piece at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlacementRow {
    piece: usize,
    col: usize,
    row: usize,
    width: usize,
    height: usize,
}

/// Sparse matrix in index form.
///
/// Nodes `0..columns` are the column headers; incidence nodes follow.
/// `up`/`down` carry the circular vertical lists, `left`/`right` the
/// ring of still-active columns with the root at index `columns`. Each
/// matrix row's nodes are contiguous in construction order, so `spans`
/// replaces the horizontal links of the classic formulation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Matrix {
    rows: Vec<PlacementRow>,
    spans: Vec<(usize, usize)>,
    node_row: Vec<usize>,
    node_col: Vec<usize>,
    up: Vec<usize>,
    down: Vec<usize>,
    left: Vec<usize>,
    right: Vec<usize>,
    len: Vec<usize>,
    columns: usize,
}

/// Pack `rects` into `board` via exact cover, or report that no exact
/// packing exists.
pub fn pack(board: Board, rects: &[Rect]) -> Option<Tiling> {
    let mut matrix = Matrix::build(board, rects);
    let mut chosen = Vec::with_capacity(rects.len());
    if !matrix.search(&mut chosen) {
        return None;
    }
    let mut tiling = Tiling::empty(board);
    for &row_id in &chosen {
        if let Some(placement) = matrix.rows.get(row_id) {
            tiling.stamp(
                (placement.piece + 1) as u16,
                placement.col,
                placement.row,
                &Rect::new(placement.width, placement.height),
            );
        }
    }
    Some(tiling)
}

impl Matrix {
    /// Translate a packing instance into linked-matrix form.
    ///
    /// Columns `0..tiles` are the board cells in row-major order,
    /// columns `tiles..tiles + rects.len()` demand one use of each
    /// piece. Rows are generated piece by piece, given orientation
    /// before rotated (squares once), positions row-major, which fixes
    /// the search order and makes the solver deterministic.
    fn build(board: Board, rects: &[Rect]) -> Self {
        let tiles = board.area();
        let columns = tiles + rects.len();
        let ring = columns + 1;

        let mut matrix = Self {
            rows: Vec::new(),
            spans: Vec::new(),
            node_row: (0..columns).map(|_| usize::MAX).collect(),
            node_col: (0..columns).collect(),
            up: (0..columns).collect(),
            down: (0..columns).collect(),
            left: (0..ring).map(|i| (i + ring - 1) % ring).collect(),
            right: (0..ring).map(|i| (i + 1) % ring).collect(),
            len: vec![0; columns],
            columns,
        };

        for (piece, rect) in rects.iter().enumerate() {
            let mut orientations = vec![*rect];
            if !rect.is_square() {
                orientations.push(rect.rotated());
            }
            for shape in orientations {
                if !shape.fits(board.cols, board.rows) {
                    continue;
                }
                for row in 0..=(board.rows - shape.height) {
                    for col in 0..=(board.cols - shape.width) {
                        matrix.push_placement(
                            board,
                            tiles,
                            PlacementRow {
                                piece,
                                col,
                                row,
                                width: shape.width,
                                height: shape.height,
                            },
                        );
                    }
                }
            }
        }
        matrix
    }

    fn push_placement(&mut self, board: Board, tiles: usize, placement: PlacementRow) {
        let row_id = self.rows.len();
        let start = self.up.len();
        for r in placement.row..placement.row + placement.height {
            for c in placement.col..placement.col + placement.width {
                self.push_node(row_id, r * board.cols + c);
            }
        }
        self.push_node(row_id, tiles + placement.piece);
        self.rows.push(placement);
        self.spans.push((start, self.up.len()));
    }

    /// Append one incidence node at the bottom of its column list.
    fn push_node(&mut self, row_id: usize, col: usize) {
        let node = self.up.len();
        let above = self.up_of(col);
        self.node_row.push(row_id);
        self.node_col.push(col);
        self.up.push(above);
        self.down.push(col);
        self.set_down(above, node);
        self.set_up(col, node);
        if let Some(count) = self.len.get_mut(col) {
            *count += 1;
        }
    }

    const fn root(&self) -> usize {
        self.columns
    }

    fn up_of(&self, node: usize) -> usize {
        self.up.get(node).copied().unwrap_or(node)
    }

    fn down_of(&self, node: usize) -> usize {
        self.down.get(node).copied().unwrap_or(node)
    }

    fn left_of(&self, col: usize) -> usize {
        self.left.get(col).copied().unwrap_or(col)
    }

    fn right_of(&self, col: usize) -> usize {
        self.right.get(col).copied().unwrap_or(col)
    }

    fn set_up(&mut self, node: usize, target: usize) {
        if let Some(slot) = self.up.get_mut(node) {
            *slot = target;
        }
    }

    fn set_down(&mut self, node: usize, target: usize) {
        if let Some(slot) = self.down.get_mut(node) {
            *slot = target;
        }
    }

    fn col_len(&self, col: usize) -> usize {
        self.len.get(col).copied().unwrap_or(0)
    }

    fn row_of(&self, node: usize) -> usize {
        self.node_row.get(node).copied().unwrap_or(usize::MAX)
    }

    fn col_of(&self, node: usize) -> usize {
        self.node_col.get(node).copied().unwrap_or(0)
    }

    fn span_of(&self, row_id: usize) -> (usize, usize) {
        self.spans.get(row_id).copied().unwrap_or((0, 0))
    }

    /// Unlink `col` from the active ring and every intersecting row from
    /// all other columns. The column's own vertical list is untouched,
    /// which is what lets [`Self::uncover_column`] rebuild it exactly.
    fn cover_column(&mut self, col: usize) {
        let l = self.left_of(col);
        let r = self.right_of(col);
        if let Some(slot) = self.right.get_mut(l) {
            *slot = r;
        }
        if let Some(slot) = self.left.get_mut(r) {
            *slot = l;
        }
        let mut node = self.down_of(col);
        while node != col {
            let (start, end) = self.span_of(self.row_of(node));
            for other in start..end {
                if other == node {
                    continue;
                }
                let above = self.up_of(other);
                let below = self.down_of(other);
                self.set_down(above, below);
                self.set_up(below, above);
                let other_col = self.col_of(other);
                if let Some(count) = self.len.get_mut(other_col) {
                    *count -= 1;
                }
            }
            node = self.down_of(node);
        }
    }

    /// Exact inverse of [`Self::cover_column`]: rows bottom-up, siblings
    /// right-to-left, ring relink last.
    fn uncover_column(&mut self, col: usize) {
        let mut node = self.up_of(col);
        while node != col {
            let (start, end) = self.span_of(self.row_of(node));
            for other in (start..end).rev() {
                if other == node {
                    continue;
                }
                let above = self.up_of(other);
                let below = self.down_of(other);
                self.set_down(above, other);
                self.set_up(below, other);
                let other_col = self.col_of(other);
                if let Some(count) = self.len.get_mut(other_col) {
                    *count += 1;
                }
            }
            node = self.up_of(node);
        }
        let l = self.left_of(col);
        let r = self.right_of(col);
        if let Some(slot) = self.right.get_mut(l) {
            *slot = col;
        }
        if let Some(slot) = self.left.get_mut(r) {
            *slot = col;
        }
    }

    /// Pick the active column with the fewest candidate rows, keeping
    /// the first encountered on ties.
    fn choose_column(&self) -> Option<usize> {
        let root = self.root();
        let first = self.right_of(root);
        if first == root {
            return None;
        }
        let mut chosen = first;
        let mut best = self.col_len(first);
        let mut col = self.right_of(first);
        while col != root {
            let count = self.col_len(col);
            if count < best {
                best = count;
                chosen = col;
            }
            col = self.right_of(col);
        }
        Some(chosen)
    }

    /// Algorithm X. Empty active ring means every constraint is met;
    /// a successful recursive call returns without undoing anything.
    fn search(&mut self, solution: &mut Vec<usize>) -> bool {
        let Some(chosen) = self.choose_column() else {
            return true;
        };
        if self.col_len(chosen) == 0 {
            return false;
        }
        self.cover_column(chosen);
        let mut node = self.down_of(chosen);
        while node != chosen {
            let row_id = self.row_of(node);
            solution.push(row_id);
            let (start, end) = self.span_of(row_id);
            for other in start..end {
                if other != node {
                    let col = self.col_of(other);
                    self.cover_column(col);
                }
            }
            if self.search(solution) {
                return true;
            }
            for other in (start..end).rev() {
                if other != node {
                    let col = self.col_of(other);
                    self.uncover_column(col);
                }
            }
            solution.pop();
            node = self.down_of(node);
        }
        self.uncover_column(chosen);
        false
    }
}
