//! Engine and search benchmarks.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - Legal move generation on a full board
//! - Random playouts from a fresh random setup
//! - MCTS iteration throughput and minimax decisions

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_dvonn::games::dvonn::movegen;
use rust_dvonn::{
    DvonnEvaluator, DvonnState, GameConfig, GameRng, MCTSConfig, MCTSSearch, MinimaxBot,
    PlayerId,
};

fn midgame(seed: u64) -> DvonnState {
    DvonnState::random_setup(&GameConfig::default(), &mut GameRng::new(seed))
}

// =============================================================================
// Engine Benchmarks
// =============================================================================

fn bench_movegen(c: &mut Criterion) {
    let state = midgame(42);
    c.bench_function("movegen_full_board", |b| {
        b.iter(|| movegen::movement_actions(black_box(state.board()), PlayerId::new(0)))
    });
}

fn bench_random_playout(c: &mut Criterion) {
    let start = midgame(42);
    c.bench_function("random_playout", |b| {
        let mut rng = GameRng::new(7);
        b.iter(|| {
            let mut state = start.clone();
            loop {
                let Some(&action) = rng.choose(state.legal_actions()) else {
                    break;
                };
                state.apply_action(&action);
            }
            black_box(state.result())
        })
    });
}

fn bench_random_setup(c: &mut Criterion) {
    let config = GameConfig::default();
    c.bench_function("random_setup", |b| {
        let mut rng = GameRng::new(3);
        b.iter(|| black_box(DvonnState::random_setup(&config, &mut rng)))
    });
}

// =============================================================================
// Search Benchmarks
// =============================================================================

fn bench_mcts_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_iterations");
    let state = midgame(42);

    for iterations in [100u32, 400, 1600] {
        group.throughput(Throughput::Elements(u64::from(iterations)));
        group.bench_with_input(
            BenchmarkId::new("midgame", iterations),
            &iterations,
            |b, &iterations| {
                let mut search = MCTSSearch::new(MCTSConfig::default());
                b.iter(|| black_box(search.search_iterations(&state, iterations)))
            },
        );
    }

    group.finish();
}

fn bench_minimax_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_depth");
    let state = midgame(42);

    for depth in [0u32, 1, 2] {
        group.bench_with_input(BenchmarkId::new("midgame", depth), &depth, |b, &depth| {
            let mut bot = MinimaxBot::new(DvonnEvaluator::new(), depth);
            b.iter(|| black_box(bot.choose_action(&state)))
        });
    }

    group.finish();
}

criterion_group!(engine, bench_movegen, bench_random_playout, bench_random_setup);
criterion_group!(search, bench_mcts_iterations, bench_minimax_depth);
criterion_main!(engine, search);
