//! Performance measurement for candidate enumeration at growing board sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mondrian::board::catalog::Catalog;
use mondrian::board::grid::Board;
use mondrian::search::subsets::{SearchLimits, SubsetEnumerator};
use std::hint::black_box;

/// Measures the defect-pruned subset walk over full catalogs as the board
/// side grows from 6 to 12
fn bench_enumerate_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_candidates");

    for &side in &[6_usize, 8, 10, 12] {
        let board = Board::square(side);
        let area = board.area();
        let cap = (area + side) / 2;
        let catalog = Catalog::build(board, 1..=cap);
        let limits = SearchLimits {
            target_area: area,
            defect_bound: side,
            defect_floor: 0,
            min_pieces: 2,
        };

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let enumerator = SubsetEnumerator::new(black_box(&catalog), limits);
                black_box(enumerator.run())
            });
        });
    }

    group.finish();
}

/// Measures divisor-pair catalog construction on a 50x50 board
fn bench_catalog_build(c: &mut Criterion) {
    let board = Board::square(50);
    let cap = (board.area() + 50) / 2;

    c.bench_function("catalog_build_50", |b| {
        b.iter(|| black_box(Catalog::build(black_box(board), 1..=cap)));
    });
}

criterion_group!(benches, bench_enumerate_candidates, bench_catalog_build);
criterion_main!(benches);
