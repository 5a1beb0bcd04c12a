//! Full solve runs: validate, enumerate, race
//!
//! A run either proves the instance infeasible before any packing work
//! (no area-exact subset survives the bounds), finds a dissection, or
//! exhausts every candidate. The piece-area cap applied to catalog
//! enumeration comes from the defect bound itself: in a dissection of
//! `p` pieces with spread at most `d`, the largest piece cannot exceed
//! `(area + (p - 1) * d) / p`, so larger shapes never enter the search.

use crate::board::catalog::Catalog;
use crate::board::grid::{Board, Tiling};
use crate::board::rect::Rect;
use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{invalid_parameter, Result};
use crate::io::progress::ProgressSink;
use crate::pack::PackerKind;
use crate::race::scheduler::race;
use crate::search::subsets::{SearchLimits, SearchStats, SubsetEnumerator};

/// Tunable inputs of one solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Board width in cells
    pub cols: usize,
    /// Board height in cells
    pub rows: usize,
    /// Largest admissible spread between piece areas
    pub defect_bound: usize,
    /// Smallest admissible spread, for scanning defect bands
    pub defect_floor: usize,
    /// Fewest pieces a dissection may use
    pub min_pieces: usize,
    /// Packing solver to race the candidates through
    pub packer: PackerKind,
    /// Worker threads; zero means one per available core
    pub workers: usize,
}

impl SolveConfig {
    /// Square-board configuration with library defaults for the rest.
    pub const fn square(side: usize, defect_bound: usize) -> Self {
        Self {
            cols: side,
            rows: side,
            defect_bound,
            defect_floor: 0,
            min_pieces: 2,
            packer: PackerKind::TopLeft,
            workers: 0,
        }
    }
}

/// A dissection meeting every constraint of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Spread between the largest and smallest piece area
    pub defect: usize,
    /// The pieces, area descending, as stamped into the tiling
    pub pieces: Vec<Rect>,
    /// Cell-level layout; owner `k` is `pieces[k - 1]`
    pub tiling: Tiling,
}

/// What a solve run concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A dissection within the bounds was found
    Solved(Solution),
    /// No area-exact piece combination satisfies the bounds
    Infeasible,
    /// Combinations existed but none packed the board
    Exhausted,
}

/// Outcome plus the counters accumulated along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Verdict of the run
    pub outcome: SolveOutcome,
    /// Subset-search statistics
    pub search: SearchStats,
    /// Candidate subsets that entered the race
    pub candidates: usize,
    /// Candidates packed to completion before the race stopped
    pub attempted: usize,
    /// Worker threads lost to panics
    pub failed_workers: usize,
}

/// Run the whole pipeline for one configuration.
///
/// # Errors
///
/// Returns [`crate::SolverError::InvalidParameter`] when the board is
/// degenerate or oversized, the piece minimum is zero, or the defect
/// floor exceeds the bound.
pub fn solve(config: &SolveConfig, progress: &dyn ProgressSink) -> Result<SolveReport> {
    validate(config)?;
    let board = Board::new(config.cols, config.rows);
    let area = board.area();

    let spread = config.defect_bound.saturating_mul(config.min_pieces - 1);
    let cap = (area.saturating_add(spread) / config.min_pieces).min(area);
    let catalog = Catalog::build(board, 1..=cap);

    let limits = SearchLimits {
        target_area: area,
        defect_bound: config.defect_bound,
        defect_floor: config.defect_floor,
        min_pieces: config.min_pieces,
    };
    let (found, search) = SubsetEnumerator::new(&catalog, limits).run();
    let candidates = found.into_vec();

    if candidates.is_empty() {
        progress.finish("no viable piece combination");
        return Ok(SolveReport {
            outcome: SolveOutcome::Infeasible,
            search,
            candidates: 0,
            attempted: 0,
            failed_workers: 0,
        });
    }

    let workers = if config.workers == 0 {
        num_cpus::get()
    } else {
        config.workers
    };
    let raced = race(board, &catalog, &candidates, config.packer, workers, progress);

    let outcome = match raced.win {
        Some(win) => match candidates.get(win.subset) {
            Some(candidate) => {
                let pieces = candidate.rects(&catalog);
                debug_assert!(win.tiling.verify(&pieces), "winners carry a valid tiling");
                progress.finish(&format!("✓ defect {} in {} pieces", win.defect, pieces.len()));
                SolveOutcome::Solved(Solution {
                    defect: win.defect,
                    pieces,
                    tiling: win.tiling,
                })
            }
            None => SolveOutcome::Exhausted,
        },
        None => {
            progress.finish("exhausted every candidate");
            SolveOutcome::Exhausted
        }
    };

    Ok(SolveReport {
        outcome,
        search,
        candidates: candidates.len(),
        attempted: raced.attempted,
        failed_workers: raced.failed_workers,
    })
}

fn validate(config: &SolveConfig) -> Result<()> {
    if config.cols == 0 {
        return Err(invalid_parameter(
            "cols",
            &config.cols,
            &"the board needs at least one column",
        ));
    }
    if config.rows == 0 {
        return Err(invalid_parameter(
            "rows",
            &config.rows,
            &"the board needs at least one row",
        ));
    }
    if config.min_pieces == 0 {
        return Err(invalid_parameter(
            "min-pieces",
            &config.min_pieces,
            &"a dissection needs at least one piece",
        ));
    }
    if config.defect_floor > config.defect_bound {
        return Err(invalid_parameter(
            "defect-floor",
            &config.defect_floor,
            &format!("exceeds the defect bound {}", config.defect_bound),
        ));
    }
    if config.cols.max(config.rows) > MAX_BOARD_DIMENSION {
        return Err(invalid_parameter(
            "board",
            &format!("{}x{}", config.cols, config.rows),
            &format!("dimensions above {MAX_BOARD_DIMENSION} are not supported"),
        ));
    }
    Ok(())
}
