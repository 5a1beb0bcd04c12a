//! Races candidate subsets across a worker pool
//!
//! Candidates arrive sorted by rising defect. Workers pull indices from
//! a shared cursor, pack each pulled subset to completion, and stop
//! pulling once anyone succeeds. Because the cursor hands out a gapless
//! prefix of the list, every index below a recorded success has a
//! definite verdict, so taking the minimum `(defect, index)` over the
//! worker slots reproduces the sequential search result no matter how
//! the threads interleave.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use crate::board::catalog::Catalog;
use crate::board::grid::{Board, Tiling};
use crate::io::progress::ProgressSink;
use crate::pack::{pack_rects, PackerKind};
use crate::search::candidates::CandidateSubset;

/// First successful packing in candidate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceWin {
    /// Index of the winning candidate in the raced list
    pub subset: usize,
    /// Defect of the winning candidate
    pub defect: usize,
    /// The completed tiling
    pub tiling: Tiling,
}

/// Outcome of one race over a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceReport {
    /// Subsets packed to completion before the race stopped
    pub attempted: usize,
    /// Worker threads that panicked instead of finishing
    pub failed_workers: usize,
    /// The winning packing, absent when every attempted subset failed
    pub win: Option<RaceWin>,
}

/// Cross-thread coordination state.
struct RaceContext {
    done: AtomicBool,
    cursor: AtomicUsize,
    attempted: AtomicUsize,
}

/// Everything a worker needs, cheap to copy into each spawn.
#[derive(Clone, Copy)]
struct RaceTask<'a> {
    board: Board,
    packer: PackerKind,
    catalog: &'a Catalog,
    candidates: &'a [CandidateSubset],
    context: &'a RaceContext,
    progress: &'a dyn ProgressSink,
}

/// Race `candidates` over `workers` threads and return the first success
/// in list order.
///
/// A panicking worker forfeits only the subsets it would have pulled;
/// the race carries on and the panic is surfaced in
/// [`RaceReport::failed_workers`].
pub fn race(
    board: Board,
    catalog: &Catalog,
    candidates: &[CandidateSubset],
    packer: PackerKind,
    workers: usize,
    progress: &dyn ProgressSink,
) -> RaceReport {
    let pool = workers.max(1);
    let context = RaceContext {
        done: AtomicBool::new(false),
        cursor: AtomicUsize::new(0),
        attempted: AtomicUsize::new(0),
    };
    progress.begin(candidates.len());

    let mut slots: Vec<Option<RaceWin>> = Vec::new();
    slots.resize_with(pool, || None);
    let mut failed_workers = 0;

    let task = RaceTask {
        board,
        packer,
        catalog,
        candidates,
        context: &context,
        progress,
    };
    thread::scope(|scope| {
        let handles: Vec<_> = slots
            .iter_mut()
            .map(|slot| scope.spawn(move || run_worker(task, slot)))
            .collect();
        for handle in handles {
            if handle.join().is_err() {
                failed_workers += 1;
            }
        }
    });

    RaceReport {
        attempted: context.attempted.load(Ordering::Relaxed),
        failed_workers,
        win: slots
            .into_iter()
            .flatten()
            .min_by_key(|win| (win.defect, win.subset)),
    }
}

/// Pull, pack, repeat until the list runs out or someone wins.
///
/// The `done` check sits before the pull, never between pull and pack:
/// a pulled subset always reaches a verdict, which the deterministic
/// reduction depends on.
fn run_worker(task: RaceTask<'_>, slot: &mut Option<RaceWin>) {
    loop {
        if task.context.done.load(Ordering::Acquire) {
            break;
        }
        let index = task.context.cursor.fetch_add(1, Ordering::Relaxed);
        let Some(candidate) = task.candidates.get(index) else {
            break;
        };
        let rects = candidate.rects(task.catalog);
        let packed = pack_rects(task.board, &rects, task.packer);
        task.context.attempted.fetch_add(1, Ordering::Relaxed);
        task.progress.step();
        if let Some(tiling) = packed {
            *slot = Some(RaceWin {
                subset: index,
                defect: candidate.defect,
                tiling,
            });
            task.context.done.store(true, Ordering::Release);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::rect::Rect;
    use crate::io::progress::NoProgress;
    use bitvec::prelude::*;

    /// Catalog on a 4x3 board: entries [3x3, 4x2, 2x2, 3x1].
    fn catalog() -> Catalog {
        Catalog::from_rects([
            Rect::new(3, 3),
            Rect::new(4, 2),
            Rect::new(2, 2),
            Rect::new(3, 1),
        ])
    }

    /// {4x2, 2x2} sums to 12 but cannot tile 4x3; {3x3, 3x1} can.
    fn candidates() -> Vec<CandidateSubset> {
        let mut untileable = bitvec![0; 4];
        untileable.set(1, true);
        untileable.set(2, true);
        let mut tileable = bitvec![0; 4];
        tileable.set(0, true);
        tileable.set(3, true);
        vec![
            CandidateSubset::new(untileable, 4),
            CandidateSubset::new(tileable, 6),
        ]
    }

    #[test]
    fn single_worker_skips_failures_and_wins_in_order() {
        let catalog = catalog();
        let report = race(
            Board::new(4, 3),
            &catalog,
            &candidates(),
            PackerKind::TopLeft,
            1,
            &NoProgress,
        );
        assert_eq!(report.attempted, 2);
        assert_eq!(report.failed_workers, 0);
        let win = report.win.unwrap();
        assert_eq!(win.subset, 1);
        assert_eq!(win.defect, 6);
        assert!(win.tiling.verify(&[Rect::new(3, 3), Rect::new(3, 1)]));
    }

    #[test]
    fn worker_count_does_not_change_the_winner() {
        let catalog = catalog();
        let list = candidates();
        let solo = race(
            Board::new(4, 3),
            &catalog,
            &list,
            PackerKind::DancingLinks,
            1,
            &NoProgress,
        );
        let pooled = race(
            Board::new(4, 3),
            &catalog,
            &list,
            PackerKind::DancingLinks,
            4,
            &NoProgress,
        );
        let solo_win = solo.win.unwrap();
        let pooled_win = pooled.win.unwrap();
        assert_eq!(solo_win.subset, pooled_win.subset);
        assert_eq!(solo_win.defect, pooled_win.defect);
        assert_eq!(solo_win.tiling, pooled_win.tiling);
    }

    #[test]
    fn all_failures_yield_an_empty_report() {
        let catalog = catalog();
        let mut list = candidates();
        list.truncate(1);
        let report = race(
            Board::new(4, 3),
            &catalog,
            &list,
            PackerKind::TopLeft,
            2,
            &NoProgress,
        );
        assert!(report.win.is_none());
        assert_eq!(report.attempted, 1);
    }

    #[test]
    fn empty_candidate_list_is_a_clean_exhaustion() {
        let report = race(
            Board::new(4, 3),
            &catalog(),
            &[],
            PackerKind::TopLeft,
            3,
            &NoProgress,
        );
        assert!(report.win.is_none());
        assert_eq!(report.attempted, 0);
        assert_eq!(report.failed_workers, 0);
    }
}
