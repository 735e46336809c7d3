//! Benchmarks for the mancala-engine crate.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mancala_engine::{
    perft, perft_memoized, Board, Mancala, MatchConfig, MatchRunner, Player, RandomSelector,
    Rules,
};

/// Benchmark single move application on typical positions.
fn benchmark_sowing(c: &mut Criterion) {
    let rules = Rules::default();
    let engine = Mancala::new(rules);
    let mut group = c.benchmark_group("Sowing");

    let opening = engine.new_game();
    group.bench_function("opening_move", |b| {
        b.iter(|| black_box(engine.apply_move(black_box(&opening), black_box(2))));
    });

    // Wrapping sow that laps the whole ring
    let loaded = Board::with_pockets(
        &rules,
        &[15, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 7],
        Player::South,
    )
    .unwrap();
    group.bench_function("wrapping_move", |b| {
        b.iter(|| black_box(engine.apply_move(black_box(&loaded), black_box(0))));
    });

    group.bench_function("available_moves", |b| {
        b.iter(|| black_box(engine.available_moves(black_box(&opening), Player::South)));
    });

    group.finish();
}

/// Benchmark perft at various depths from the opening position.
fn benchmark_perft(c: &mut Criterion) {
    let engine = Mancala::new(Rules::default());
    let board = engine.new_game();

    let mut group = c.benchmark_group("Perft");

    for depth in [4, 6] {
        group.bench_with_input(BenchmarkId::new("plain/depth", depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft(&engine, &board, depth)));
        });
        group.bench_with_input(
            BenchmarkId::new("memoized/depth", depth),
            &depth,
            |b, &depth| {
                b.iter(|| black_box(perft_memoized(&engine, &board, depth)));
            },
        );
    }
    group.finish();
}

/// Benchmark a full seeded random-vs-random match.
fn benchmark_match(c: &mut Criterion) {
    let engine = Mancala::new(Rules::default());
    let runner = MatchRunner::new(engine, MatchConfig::default());

    c.bench_function("random_match", |b| {
        b.iter(|| {
            let mut south = RandomSelector::new(42);
            let mut north = RandomSelector::new(1337);
            black_box(runner.play(&mut south, &mut north))
        });
    });
}

criterion_group!(benches, benchmark_sowing, benchmark_perft, benchmark_match);
criterion_main!(benches);
