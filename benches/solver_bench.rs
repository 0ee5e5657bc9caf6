//! Criterion benchmarks comparing the A* and IDA* drivers on fixed boards.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use npuzzle::{Board, IdaSolver, Solve, Solver};

const BOARDS: [(&str, &str); 3] = [
    ("3x3-14", "3  8 1 3  4 0 2  7 6 5"),
    ("3x3-23", "3  6 5 3  0 4 8  7 1 2"),
    ("4x4-07", "4  5 1 2 3  0 6 7 4  9 10 11 8  13 14 15 12"),
];

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for (name, text) in BOARDS {
        let board: Board = text.parse().unwrap();

        group.bench_with_input(BenchmarkId::new("astar", name), &board, |b, board| {
            b.iter(|| Solver::new(black_box(board)).moves())
        });
        group.bench_with_input(BenchmarkId::new("ida", name), &board, |b, board| {
            b.iter(|| IdaSolver::new(black_box(board)).moves())
        });
    }

    group.finish();
}

fn bench_unsolvable(c: &mut Criterion) {
    let board: Board = "3  2 1 3  4 5 6  7 8 0".parse().unwrap();

    c.bench_function("astar_unsolvable_3x3", |b| {
        b.iter(|| Solver::new(black_box(&board)).is_solvable())
    });
}

criterion_group!(benches, bench_solvers, bench_unsolvable);
criterion_main!(benches);
