//! Search benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - Full MCTS search with varying walk counts
//! - Random-rollout evaluation with varying walk counts
//! - Search from different game phases (opening, midgame, near-terminal)
//! - Tree operations (expansion, UCT selection, backpropagation)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use games_connect4::{Outcome, Player, State};
use mcts::{GameTree, Mcts, MctsConfig, RandomRollout, RolloutConfig};

/// Positions at different points of a game.
fn game_phases() -> Vec<(&'static str, State)> {
    vec![
        ("opening", State::new()),
        (
            "midgame",
            State::from_moves(&[3, 3, 2, 4, 4, 2, 5, 1, 0, 6, 6, 5]).unwrap(),
        ),
        (
            "near_terminal",
            State::from_moves(&[
                4, 3, 6, 0, 1, 4, 5, 5, 1, 1, 5, 0, 1, 6, 0, 1, 5, 5, 1, 0, 4, 6, 3, 2, 6, 6, 0,
                4, 6, 5, 2, 0, 4, 2,
            ])
            .unwrap(),
        ),
    ]
}

// =============================================================================
// Full Search Benchmarks
// =============================================================================

fn bench_mcts_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_walks");
    group.sample_size(10);

    for walks in [10u32, 50, 100] {
        group.throughput(Throughput::Elements(walks as u64 * 7));
        group.bench_with_input(BenchmarkId::new("opening", walks), &walks, |b, &walks| {
            let config = MctsConfig::default().with_walks(walks);
            let state = State::new();

            b.iter(|| {
                let mut agent = Mcts::with_seed(config.clone(), 42).unwrap();
                black_box(agent.search(&state).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_rollout_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollout_walks");
    group.sample_size(10);

    for walks in [10u32, 50, 100] {
        group.throughput(Throughput::Elements(walks as u64 * 7));
        group.bench_with_input(BenchmarkId::new("opening", walks), &walks, |b, &walks| {
            let config = RolloutConfig::default().with_walks(walks);
            let state = State::new();

            b.iter(|| {
                let mut agent = RandomRollout::with_seed(config.clone(), 42).unwrap();
                black_box(agent.evaluate(&state).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_mcts_game_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_game_phases");
    group.sample_size(10);

    for (name, state) in game_phases() {
        group.bench_function(name, |b| {
            let config = MctsConfig::default().with_walks(50);
            b.iter(|| {
                let mut agent = Mcts::with_seed(config.clone(), 7).unwrap();
                black_box(agent.search(&state).unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Tree Operation Benchmarks
// =============================================================================

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_operations");

    group.bench_function("expand_root", |b| {
        b.iter(|| {
            let mut tree = GameTree::new(State::new());
            tree.expand(tree.root()).unwrap();
            black_box(tree.len())
        });
    });

    group.bench_function("select_uct", |b| {
        let mut tree = GameTree::new(State::new());
        tree.expand(tree.root()).unwrap();
        let children = tree.children(tree.root()).to_vec();
        for (i, &child) in children.iter().enumerate() {
            let node = tree.get_mut(child);
            node.visit_count = 10 + i as u32;
            node.win_value = i as f64;
        }
        let ln_t = (100f64).ln();

        b.iter(|| black_box(tree.select_uct(tree.root(), ln_t, std::f64::consts::SQRT_2)));
    });

    group.bench_function("backpropagate_depth_8", |b| {
        let mut tree = GameTree::new(State::new());
        let mut leaf = tree.root();
        for depth in 0..8 {
            tree.expand(leaf).unwrap();
            leaf = tree.children(leaf)[depth % 7];
        }
        let root = tree.root();

        b.iter(|| {
            tree.backpropagate(leaf, root, Outcome::Winner(Player::Red));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_mcts_walks,
    bench_rollout_walks,
    bench_mcts_game_phases,
    bench_tree_operations,
);
criterion_main!(benches);
