//! Candidate subsets and their defect-ordered collection

use std::collections::BTreeSet;

use bitvec::prelude::*;

use crate::board::catalog::Catalog;
use crate::board::rect::Rect;

/// One area-exact selection of catalog entries.
///
/// Ordering is `(defect, mask)` ascending, so a collection of candidates
/// iterates lowest-defect first with a deterministic tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateSubset {
    /// Spread between the largest and smallest selected area
    pub defect: usize,
    /// Inclusion bit per catalog index
    pub mask: BitVec,
    /// Number of selected entries
    pub pieces: usize,
}

impl CandidateSubset {
    /// Create a candidate from its mask and derived defect
    pub fn new(mask: BitVec, defect: usize) -> Self {
        let pieces = mask.count_ones();
        Self {
            defect,
            mask,
            pieces,
        }
    }

    /// Catalog indices selected by this candidate, ascending
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask.iter_ones()
    }

    /// Resolve the selected shapes against the catalog that produced the
    /// mask, in catalog order (area descending)
    pub fn rects(&self, catalog: &Catalog) -> Vec<Rect> {
        self.selected().filter_map(|index| catalog.get(index)).collect()
    }
}

/// Candidates keyed by `(defect, mask)`, ascending by defect.
///
/// Inserting a candidate whose mask is already present overwrites the
/// stored entry instead of accumulating a duplicate.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    inner: BTreeSet<CandidateSubset>,
}

impl CandidateSet {
    /// Create an empty collection
    pub const fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    /// Insert a candidate, replacing any entry with an equal key
    pub fn insert(&mut self, candidate: CandidateSubset) {
        self.inner.replace(candidate);
    }

    /// Number of stored candidates
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the collection holds no candidates
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Smallest stored defect, if any candidate exists
    pub fn min_defect(&self) -> Option<usize> {
        self.inner.first().map(|candidate| candidate.defect)
    }

    /// Iterate candidates in ascending `(defect, mask)` order
    pub fn iter(&self) -> impl Iterator<Item = &CandidateSubset> {
        self.inner.iter()
    }

    /// Drop candidates failing the predicate
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&CandidateSubset) -> bool,
    {
        self.inner.retain(keep);
    }

    /// Consume the collection into an ordered vector
    pub fn into_vec(self) -> Vec<CandidateSubset> {
        self.inner.into_iter().collect()
    }
}
