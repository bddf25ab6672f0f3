use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::snake::{Direction, GamePhase, SnakeGameState, SnakeSessionSettings, WallCollisionMode};

fn play_ticks(settings: &SnakeSessionSettings, ticks: usize) -> u32 {
    let mut rng = SessionRng::new(12345);
    let mut state = SnakeGameState::new(settings.clone(), &mut rng).unwrap();
    let turns = [Direction::Up, Direction::Right, Direction::Down, Direction::Right];

    for i in 0..ticks {
        if state.phase() == GamePhase::GameOver {
            state.restart(&mut rng).unwrap();
        }
        if i % 7 == 0 {
            state.set_direction(turns[(i / 7) % turns.len()]);
        }
        state.tick(&mut rng);
    }
    state.score()
}

fn bench_default_board(c: &mut Criterion) {
    let settings = SnakeSessionSettings::default();
    c.bench_function("1000 ticks on default board", |b| {
        b.iter(|| play_ticks(black_box(&settings), 1000))
    });
}

fn bench_large_wrapping_board(c: &mut Criterion) {
    let settings = SnakeSessionSettings {
        rows: 100,
        cols: 100,
        wall_collision_mode: WallCollisionMode::WrapAround,
        ..SnakeSessionSettings::default()
    };
    c.bench_function("1000 ticks on 100x100 wrapping board", |b| {
        b.iter(|| play_ticks(black_box(&settings), 1000))
    });
}

criterion_group!(benches, bench_default_board, bench_large_wrapping_board);
criterion_main!(benches);
