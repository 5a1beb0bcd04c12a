//! Exact packing of a rectangle list into the board
//!
//! Two interchangeable solvers produce identical success/failure verdicts
//! for any area-exact rectangle list: the dancing-links exact-cover solver
//! and the top-left skyline backtracker.

/// Exact-cover translation and the dancing-links solver
pub mod cover;
/// Rotation-paired rectangle lists consumed by the skyline packer
pub mod pieces;
/// Top-left skyline packer with exact-restore backtracking
pub mod skyline;

use crate::board::grid::{Board, Tiling};
use crate::board::rect::Rect;
use crate::pack::pieces::PieceList;

/// Which packing solver to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackerKind {
    /// Generic exact-cover solver (Algorithm X over dancing links)
    DancingLinks,
    /// Specialized skyline backtracker, usually faster
    #[default]
    TopLeft,
}

impl PackerKind {
    /// Stable name used by the command line and reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::DancingLinks => "dancing-links",
            Self::TopLeft => "top-left",
        }
    }
}

/// Pack `rects` into `board` with the chosen solver.
///
/// Returns the tiling on success, `None` when the list admits no exact
/// packing. Callers pass lists whose areas sum to the board area; the
/// subset search guarantees that for every candidate it emits.
pub fn pack_rects(board: Board, rects: &[Rect], kind: PackerKind) -> Option<Tiling> {
    debug_assert_eq!(
        rects.iter().map(Rect::area).sum::<usize>(),
        board.area(),
        "packer inputs are area-exact by construction"
    );

    match kind {
        PackerKind::DancingLinks => cover::pack(board, rects),
        PackerKind::TopLeft => skyline::pack(board, &PieceList::new(rects)),
    }
}
