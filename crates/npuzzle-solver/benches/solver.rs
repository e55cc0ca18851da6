//! Benchmarks for the IDA* solver.
//!
//! Measures a full `solve` call on fixed instances of increasing difficulty.
//!
//! # Test Data
//!
//! - **`3x3_medium`**: a 20-step random walk from solved (seed 7)
//! - **`3x3_deep`**: `1 2 0 / 4 5 3 / 7 8 6`, 22 moves from solved
//! - **`4x4_walk`**: a 60-step random walk from the solved 4×4 board (seed 11)
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use npuzzle_core::{Board, BoardState};
use npuzzle_solver::{IdaStarSolver, testing::random_walk};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

fn instances() -> [(&'static str, Board); 3] {
    let medium = random_walk(
        &Board::solved(3).unwrap(),
        &mut Pcg64Mcg::seed_from_u64(7),
        20,
    );
    let walk = random_walk(
        &Board::solved(4).unwrap(),
        &mut Pcg64Mcg::seed_from_u64(11),
        60,
    );
    [
        ("3x3_medium", medium),
        ("3x3_deep", "1 2 . 4 5 3 7 8 6".parse().unwrap()),
        ("4x4_walk", walk),
    ]
}

fn bench_ida_star(c: &mut Criterion) {
    let solver = IdaStarSolver::new();

    let mut group = c.benchmark_group("ida_star");
    group.sample_size(10);
    for (param, board) in instances() {
        let target = Board::solved(board.dimension()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(param), &board, |b, board| {
            b.iter_batched(
                || hint::black_box(BoardState::root(board.clone())),
                |initial| {
                    let solution = solver.solve(initial, &target).unwrap();
                    hint::black_box(solution.optimal_move_count())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ida_star);
criterion_main!(benches);
