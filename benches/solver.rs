//! Benchmarks for the breadth-first and backtracking solvers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use search_puzzles::puzzles::magnets::{MagnetsConfig, MagnetsPuzzle};
use search_puzzles::puzzles::strings::StringConfig;
use search_puzzles::puzzles::tilt::TiltConfig;
use search_puzzles::puzzles::water::WaterConfig;
use search_puzzles::{solve, Backtracker, Configuration};

const TILT_BOARD: &str = "\
5
G . . * G
. B . . .
* . O . *
. . . B .
G * . . G
";

const MAGNETS_PUZZLE: &str = "\
3 4
2 1 2
2 1 2 0
1 2 2
1 2 1 1
L R T T
T T B B
B B L R
";

/// Benchmark a three-letter rotation search.
fn bench_strings(c: &mut Criterion) {
    let start = StringConfig::new("CAT", "DOG").unwrap();
    c.bench_function("strings_cat_dog", |b| b.iter(|| solve(black_box(&start))));
}

/// Benchmark the three-bucket measuring problem.
fn bench_water(c: &mut Criterion) {
    let start = WaterConfig::new(vec![8, 5, 3], 4).unwrap();
    c.bench_function("water_8_5_3", |b| b.iter(|| solve(black_box(&start))));
}

/// Benchmark solving a tilt board.
fn bench_tilt(c: &mut Criterion) {
    let start: TiltConfig = TILT_BOARD.parse().unwrap();
    c.bench_function("tilt_5x5", |b| b.iter(|| solve(black_box(&start))));
}

/// Benchmark generating tilt neighbors alone.
fn bench_tilt_neighbors(c: &mut Criterion) {
    let start: TiltConfig = TILT_BOARD.parse().unwrap();
    c.bench_function("tilt_neighbors", |b| b.iter(|| black_box(&start).neighbors()));
}

/// Benchmark enumerating every magnets solution.
fn bench_magnets(c: &mut Criterion) {
    let puzzle: MagnetsPuzzle = MAGNETS_PUZZLE.parse().unwrap();
    c.bench_function("magnets_3x4_all", |b| {
        b.iter(|| {
            Backtracker::new().solve_all(MagnetsConfig::new(black_box(puzzle.clone())), None)
        })
    });
}

criterion_group!(
    benches,
    bench_strings,
    bench_water,
    bench_tilt,
    bench_tilt_neighbors,
    bench_magnets
);
criterion_main!(benches);
