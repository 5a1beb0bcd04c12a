//! Depth-first enumerator with area and defect pruning
//!
//! Walks the catalog left to right deciding each entry in or out, keeping
//! exactly one contiguous frontier of undecided entries. Because catalog
//! areas descend, the provisional defect of a branch is always the area at
//! the first included index minus the area at the current index, so both
//! prunes are O(1) per decision.

use bitvec::prelude::*;

use crate::board::catalog::Catalog;
use crate::board::rect::Rect;
use crate::search::candidates::{CandidateSet, CandidateSubset};

/// Tri-state decision over one catalog index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Entry selected into the subset
    Included,
    /// Entry rejected from the subset
    Excluded,
    /// Entry not yet decided
    Undecided,
}

/// Enumeration target and post-filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Selected areas must sum to exactly this many tiles
    pub target_area: usize,
    /// Inclusive upper bound on the subset defect
    pub defect_bound: usize,
    /// Candidates with a defect below this are dropped after the walk
    pub defect_floor: usize,
    /// Candidates with fewer selected entries are dropped after the walk
    pub min_pieces: usize,
}

/// Counters describing one enumeration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Decision-tree nodes visited
    pub nodes: usize,
    /// Include branches pruned because the running sum overshot
    pub area_pruned: usize,
    /// Include branches pruned by the provisional defect
    pub defect_pruned: usize,
    /// Whether the suffix-termination rule ended the walk
    pub early_stop: bool,
}

/// Branch-and-bound walker over one catalog
#[derive(Debug)]
pub struct SubsetEnumerator {
    areas: Vec<usize>,
    limits: SearchLimits,
    decisions: Vec<Decision>,
    found: CandidateSet,
    stats: SearchStats,
}

impl SubsetEnumerator {
    /// Prepare a walk over `catalog` under `limits`
    pub fn new(catalog: &Catalog, limits: SearchLimits) -> Self {
        let areas: Vec<usize> = catalog.entries().iter().map(Rect::area).collect();
        let decisions = vec![Decision::Undecided; areas.len()];

        Self {
            areas,
            limits,
            decisions,
            found: CandidateSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Run the enumeration and return every valid candidate, ordered by
    /// `(defect, mask)` ascending, together with the walk counters.
    ///
    /// A candidate is valid when its areas sum to the target and its
    /// defect is within the bound; the floor and piece-count filters are
    /// applied after the walk. An empty result is a normal outcome.
    pub fn run(mut self) -> (CandidateSet, SearchStats) {
        self.walk(0, 0, None, None, None);

        let limits = self.limits;
        self.found.retain(|candidate| {
            candidate.pieces >= limits.min_pieces && candidate.defect >= limits.defect_floor
        });

        (self.found, self.stats)
    }

    /// Decide index `index` both ways, restoring the frontier on the way
    /// out. Returns `true` when the suffix-termination rule fired and the
    /// remaining tree holds no further valid mask.
    fn walk(
        &mut self,
        index: usize,
        sum: usize,
        first_in: Option<usize>,
        last_in: Option<usize>,
        last_ex: Option<usize>,
    ) -> bool {
        self.stats.nodes += 1;

        if index == self.areas.len() {
            return self.finish_leaf(sum, first_in, last_in, last_ex);
        }

        let area = self.areas.get(index).copied().unwrap_or(0);

        // Included first: the all-in prefix reaches large sums quickly and
        // the area prune cuts it off early
        let next_sum = sum + area;
        let spread = first_in
            .and_then(|first| self.areas.get(first).copied())
            .map_or(0, |largest| largest - area);

        if next_sum > self.limits.target_area {
            self.stats.area_pruned += 1;
        } else if spread > self.limits.defect_bound {
            self.stats.defect_pruned += 1;
        } else {
            if let Some(decision) = self.decisions.get_mut(index) {
                *decision = Decision::Included;
            }
            let stop = self.walk(
                index + 1,
                next_sum,
                first_in.or(Some(index)),
                Some(index),
                last_ex,
            );
            if let Some(decision) = self.decisions.get_mut(index) {
                *decision = Decision::Undecided;
            }
            if stop {
                return true;
            }
        }

        if let Some(decision) = self.decisions.get_mut(index) {
            *decision = Decision::Excluded;
        }
        let stop = self.walk(index + 1, sum, first_in, last_in, Some(index));
        if let Some(decision) = self.decisions.get_mut(index) {
            *decision = Decision::Undecided;
        }

        stop
    }

    /// Record a fully decided mask if valid, then apply the termination
    /// rule: a mask whose first included index is past its last excluded
    /// index means the whole remaining tail was included, and every mask
    /// the walk would visit afterwards selects a strict subset of that
    /// tail — with descending areas its sum can never reach the target
    /// again, so the walk stops.
    fn finish_leaf(
        &mut self,
        sum: usize,
        first_in: Option<usize>,
        last_in: Option<usize>,
        last_ex: Option<usize>,
    ) -> bool {
        if sum == self.limits.target_area {
            self.record(first_in, last_in);
        }

        let stop = match (first_in, last_ex) {
            (_, None) | (None, Some(_)) => true,
            (Some(first), Some(last)) => first > last,
        };
        if stop {
            self.stats.early_stop = true;
        }

        stop
    }

    fn record(&mut self, first_in: Option<usize>, last_in: Option<usize>) {
        let defect = match (first_in, last_in) {
            (Some(first), Some(last)) => {
                let largest = self.areas.get(first).copied().unwrap_or(0);
                let smallest = self.areas.get(last).copied().unwrap_or(0);
                largest - smallest
            }
            _ => 0,
        };
        debug_assert!(
            defect <= self.limits.defect_bound,
            "defect prune must keep recorded masks within the bound"
        );

        let mut mask = bitvec![0; self.decisions.len()];
        for (index, decision) in self.decisions.iter().enumerate() {
            if *decision == Decision::Included {
                mask.set(index, true);
            }
        }

        self.found.insert(CandidateSubset::new(mask, defect));
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchLimits, SubsetEnumerator};
    use crate::board::catalog::Catalog;
    use crate::board::grid::Board;
    use crate::board::rect::Rect;

    fn limits(target_area: usize, defect_bound: usize) -> SearchLimits {
        SearchLimits {
            target_area,
            defect_bound,
            defect_floor: 0,
            min_pieces: 1,
        }
    }

    #[test]
    fn finds_the_unique_exact_partitions() {
        // Areas 12, 8, 4 on a target of 12: {12} and {8, 4}
        let catalog = Catalog::from_rects([Rect::new(4, 3), Rect::new(4, 2), Rect::new(4, 1)]);
        let (found, stats) = SubsetEnumerator::new(&catalog, limits(12, 12)).run();

        let picks: Vec<(usize, Vec<usize>)> = found
            .iter()
            .map(|candidate| (candidate.defect, candidate.selected().collect()))
            .collect();
        assert_eq!(picks, vec![(0, vec![0]), (4, vec![1, 2])]);
        assert!(stats.early_stop, "the {{8, 4}} leaf is suffix-shaped");
    }

    #[test]
    fn defect_bound_excludes_wide_spreads() {
        let catalog = Catalog::from_rects([Rect::new(4, 3), Rect::new(4, 2), Rect::new(4, 1)]);
        let (found, stats) = SubsetEnumerator::new(&catalog, limits(12, 2)).run();

        let picks: Vec<Vec<usize>> = found
            .iter()
            .map(|candidate| candidate.selected().collect())
            .collect();
        assert_eq!(picks, vec![vec![0]], "{{8, 4}} has defect 4 > 2");
        assert!(stats.defect_pruned > 0);
    }

    #[test]
    fn area_four_catalog_cannot_reach_sixteen() {
        // Divisor pairs of 4 on a 4x4 board: 4x1 and 2x2, both of area 4
        let catalog = Catalog::build(Board::square(4), 4..=4);
        assert_eq!(catalog.len(), 2);

        let (found, _) = SubsetEnumerator::new(&catalog, limits(16, 2)).run();
        assert!(found.is_empty(), "two area-4 classes top out at 8 tiles");
    }

    #[test]
    fn min_pieces_filter_drops_the_whole_board_piece() {
        let catalog = Catalog::from_rects([Rect::new(5, 5), Rect::new(5, 2), Rect::new(5, 1)]);

        let (unfiltered, _) = SubsetEnumerator::new(&catalog, limits(25, 25)).run();
        assert_eq!(unfiltered.len(), 1, "only {{5x5}} is area-exact");

        let mut paired = limits(25, 25);
        paired.min_pieces = 2;
        let (found, _) = SubsetEnumerator::new(&catalog, paired).run();
        assert!(found.is_empty());
    }

    #[test]
    fn defect_floor_discards_low_spreads_post_hoc() {
        let catalog = Catalog::from_rects([Rect::new(4, 3), Rect::new(4, 2), Rect::new(4, 1)]);
        let mut floored = limits(12, 12);
        floored.defect_floor = 1;
        let (found, _) = SubsetEnumerator::new(&catalog, floored).run();

        let defects: Vec<usize> = found.iter().map(|candidate| candidate.defect).collect();
        assert_eq!(defects, vec![4], "the defect-0 singleton {{12}} is floored away");
    }
}
