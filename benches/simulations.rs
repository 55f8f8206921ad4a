use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use gifts::{basins, octopus::Cavern, polymer, Grid};

/// Deterministic digit grid; no two runs differ.
fn digits(rows: usize, cols: usize, seed: u64) -> String {
    let mut state = seed;
    let mut out = String::with_capacity(rows * (cols + 1));
    for _ in 0 .. rows {
        for _ in 0 .. cols {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            out.push(char::from(b'0' + (state >> 33) as u8 % 10));
        }
        out.push('\n');
    }
    out
}

const POLYMER: &str = "NNCB\n\nCH -> B\nHH -> N\nCB -> H\nNH -> C\nHB -> C\nHC -> B\nHN -> C\nNN -> C\nBH -> H\nNC -> B\nNB -> B\nBN -> B\nBB -> N\nBC -> B\nCC -> N\nCN -> C\n";

fn bench_octopus(c: &mut Criterion) {
    let start = Cavern::parse(&digits(10, 10, 11)).unwrap();
    c.bench_function("octopus/100_steps", |bch| {
        bch.iter_batched(
            || start.clone(),
            |mut cavern| black_box(cavern.run(100)),
            BatchSize::SmallInput,
        )
    });
    let big = Cavern::parse(&digits(100, 100, 12)).unwrap();
    c.bench_function("octopus/100x100_10_steps", |bch| {
        bch.iter_batched(
            || big.clone(),
            |mut cavern| black_box(cavern.run(10)),
            BatchSize::SmallInput,
        )
    });
}

/// 5x5 bowls between walls of 9s; height is the distance to the bowl's corner,
/// so every cell has a strictly lower neighbour until it reaches the corner.
fn bowls(rows: usize, cols: usize) -> String {
    (0 .. rows).map(|r| {
        let mut line: String = (0 .. cols).map(|c| match (r % 6, c % 6) {
            (0, _) | (_, 0) => '9',
            (dr, dc) => char::from(b'0' + (dr - 1 + dc - 1) as u8),
        }).collect();
        line.push('\n');
        line
    }).collect()
}

fn bench_basins(c: &mut Criterion) {
    let heights = Grid::parse_digits(&bowls(100, 100)).unwrap();
    assert!(basins::basin_sizes(&heights).is_ok());
    c.bench_function("basins/risk_level", |bch| bch.iter(|| black_box(basins::risk_level(&heights))));
    c.bench_function("basins/sizes", |bch| bch.iter(|| black_box(basins::basin_sizes(&heights))));
}

fn bench_polymer(c: &mut Criterion) {
    let (start, rules) = polymer::parse(POLYMER).unwrap();
    c.bench_function("polymer/40_steps", |bch| {
        bch.iter(|| black_box(polymer::grow(start.clone(), &rules, polymer::LONG_RUN).spread()))
    });
}

criterion_group!(benches, bench_octopus, bench_basins, bench_polymer);
criterion_main!(benches);
