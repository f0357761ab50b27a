//! Benchmarks for whole-puzzle solving and bare propagation.
//!
//! `solve` measures the full pipeline on boards that need no search
//! (`classic`), little search (`empty`), and heavy search (`sparse`).
//! `propagate` isolates the rule loop by running it once to a fixpoint.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridoku_core::DigitGrid;
use gridoku_solver::{Propagator, SolveStats, Solver, WorkGrid};

const CLASSIC: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const SPARSE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
";

fn puzzles() -> [(&'static str, DigitGrid); 3] {
    [
        ("classic", CLASSIC.parse().unwrap()),
        ("sparse", SPARSE.parse().unwrap()),
        ("empty", DigitGrid::new()),
    ]
}

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new();

    for (param, puzzle) in puzzles() {
        c.bench_with_input(BenchmarkId::new("solve", param), &puzzle, |b, puzzle| {
            b.iter(|| {
                let outcome = solver.solve(hint::black_box(puzzle));
                hint::black_box(outcome)
            });
        });
    }
}

fn bench_propagate(c: &mut Criterion) {
    let propagator = Propagator::with_default_rules();

    for (param, puzzle) in puzzles() {
        c.bench_with_input(
            BenchmarkId::new("propagate", param),
            &puzzle,
            |b, puzzle| {
                b.iter_batched_ref(
                    || hint::black_box(WorkGrid::from_puzzle(puzzle)),
                    |grid| {
                        let mut stats = SolveStats::new();
                        let fixpoint = propagator.run(grid, &mut stats).unwrap();
                        hint::black_box(fixpoint)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_solve, bench_propagate);
criterion_main!(benches);
