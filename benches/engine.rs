//! Benchmarks for the step hot path and mid-game cloning.

use criterion::{criterion_group, criterion_main, Criterion};

use rust_tictactoe::{Action, TicTacToe};

/// A full nine-move game ending in a draw.
const DRAW_SEQUENCE: [u32; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("step_full_game", |b| {
        b.iter(|| {
            let mut game = TicTacToe::default();
            for &action in &DRAW_SEQUENCE {
                game.step(Action::new(action)).unwrap();
            }
            game
        })
    });
}

fn bench_clone_midgame(c: &mut Criterion) {
    let mut game = TicTacToe::default();
    for &action in &DRAW_SEQUENCE[..5] {
        game.step(Action::new(action)).unwrap();
    }

    c.bench_function("clone_midgame", |b| b.iter(|| game.clone()));
}

fn bench_legal_actions_large_grid(c: &mut Criterion) {
    let mut game = TicTacToe::new(9).unwrap();
    // Scatter some moves so the scan is not all-empty.
    for &action in &[0, 40, 1, 41, 2, 43, 9, 50, 10, 51] {
        game.step(Action::new(action)).unwrap();
    }

    c.bench_function("legal_actions_9x9", |b| b.iter(|| game.legal_actions()));
}

criterion_group!(
    benches,
    bench_full_game,
    bench_clone_midgame,
    bench_legal_actions_large_grid
);
criterion_main!(benches);
