//! Cross-validates the two packers on randomized guillotine instances

use mondrian::board::grid::Board;
use mondrian::board::rect::Rect;
use mondrian::math::divisors::divisor_pairs;
use mondrian::pack::{pack_rects, PackerKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Split a rectangle into `leaves` pieces with random guillotine cuts.
///
/// The leaves tile the rectangle by construction, so every emitted list
/// is packable and area-exact.
fn split(rng: &mut StdRng, rect: Rect, leaves: usize, out: &mut Vec<Rect>) {
    if leaves <= 1 || (rect.width == 1 && rect.height == 1) {
        out.push(rect);
        return;
    }
    let vertical = if rect.width == 1 {
        false
    } else if rect.height == 1 {
        true
    } else {
        rng.random_bool(0.5)
    };
    let first = rng.random_range(1..leaves);
    if vertical {
        let cut = rng.random_range(1..rect.width);
        split(rng, Rect::new(cut, rect.height), first, out);
        split(rng, Rect::new(rect.width - cut, rect.height), leaves - first, out);
    } else {
        let cut = rng.random_range(1..rect.height);
        split(rng, Rect::new(rect.width, cut), first, out);
        split(rng, Rect::new(rect.width, rect.height - cut), leaves - first, out);
    }
}

fn random_instance(rng: &mut StdRng) -> (Board, Vec<Rect>) {
    let cols = rng.random_range(3..=8);
    let rows = rng.random_range(3..=8);
    let pieces = rng.random_range(2..=6);
    let mut rects = Vec::new();
    split(rng, Rect::new(cols, rows), pieces, &mut rects);
    (Board::new(cols, rows), rects)
}

/// Swap one piece for a different shape of equal area, when one exists.
///
/// Area stays exact, so the packers must still agree, but the instance
/// may no longer tile, which exercises the failure path of both.
fn reshape_first(rng: &mut StdRng, rects: &mut [Rect]) -> bool {
    let Some(first) = rects.first().copied() else {
        return false;
    };
    let alternatives: Vec<Rect> = divisor_pairs(first.area())
        .into_iter()
        .map(|(width, height)| Rect::new(width, height))
        .filter(|shape| !shape.congruent(&first))
        .collect();
    if alternatives.is_empty() {
        return false;
    }
    let pick = rng.random_range(0..alternatives.len());
    if let (Some(slot), Some(shape)) = (rects.first_mut(), alternatives.get(pick)) {
        *slot = *shape;
        return true;
    }
    false
}

#[test]
fn test_guillotine_instances_pack_under_both_solvers() {
    let mut rng = StdRng::seed_from_u64(0x4d6f_6e64);
    for round in 0..120 {
        let (board, rects) = random_instance(&mut rng);
        let top_left = pack_rects(board, &rects, PackerKind::TopLeft);
        let dancing = pack_rects(board, &rects, PackerKind::DancingLinks);

        let tiling = top_left.unwrap_or_else(|| panic!("top-left failed round {round}"));
        assert!(tiling.verify(&rects), "top-left tiling invalid, round {round}");
        let tiling = dancing.unwrap_or_else(|| panic!("dancing-links failed round {round}"));
        assert!(tiling.verify(&rects), "dancing-links tiling invalid, round {round}");
    }
}

#[test]
fn test_packers_agree_on_reshaped_instances() {
    let mut rng = StdRng::seed_from_u64(0x7269_616e);
    for round in 0..120 {
        let (board, mut rects) = random_instance(&mut rng);
        if !reshape_first(&mut rng, &mut rects) {
            continue;
        }
        let top_left = pack_rects(board, &rects, PackerKind::TopLeft);
        let dancing = pack_rects(board, &rects, PackerKind::DancingLinks);
        assert_eq!(
            top_left.is_some(),
            dancing.is_some(),
            "solvers disagree on round {round}: {rects:?} in {board}"
        );
        if let Some(tiling) = top_left {
            assert!(tiling.verify(&rects), "round {round}");
        }
        if let Some(tiling) = dancing {
            assert!(tiling.verify(&rects), "round {round}");
        }
    }
}

#[test]
fn test_known_unsatisfiable_list_fails_in_both_solvers() {
    // Two full-width bars force two whole rows, leaving a single row
    // that cannot host the square.
    let board = Board::new(4, 3);
    let rects = [Rect::new(4, 1), Rect::new(4, 1), Rect::new(2, 2)];
    assert!(pack_rects(board, &rects, PackerKind::TopLeft).is_none());
    assert!(pack_rects(board, &rects, PackerKind::DancingLinks).is_none());
}

#[test]
fn test_single_cell_board_packs_trivially() {
    let board = Board::square(1);
    let rects = [Rect::new(1, 1)];
    for kind in [PackerKind::TopLeft, PackerKind::DancingLinks] {
        let tiling = pack_rects(board, &rects, kind).unwrap();
        assert!(tiling.verify(&rects));
    }
}
