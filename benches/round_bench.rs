use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use trade_winds::board::Compass;
use trade_winds::core::{AdventurerId, Result, Ruleset, TileId};
use trade_winds::decision::DecisionMaker;
use trade_winds::game::{Game, GameBuilder};

/// Explores in a rotating direction and trades wherever it can.
struct Explorer;

impl DecisionMaker for Explorer {
    fn continue_turn(&mut self, game: &mut Game, adventurer: AdventurerId) -> Result<()> {
        let offset = (adventurer.0 + game.turn()) as usize;
        for i in 0..4 {
            let direction = Compass::ALL[(offset + i) % 4];
            if game.can_move(adventurer, Some(direction))? {
                game.move_adventurer(adventurer, direction, self)?;
                return Ok(());
            }
        }
        game.wait(adventurer, self)?;
        Ok(())
    }

    fn check_trade(&mut self, _: &Game, _: AdventurerId, _: TileId) -> bool {
        true
    }
}

fn deciders(count: usize) -> Vec<Box<dyn DecisionMaker>> {
    (0..count)
        .map(|_| Box::new(Explorer) as Box<dyn DecisionMaker>)
        .collect()
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("build_regular_4p", |b| {
        b.iter(|| {
            GameBuilder::new(Ruleset::regular())
                .player_count(4)
                .build(black_box(42))
        })
    });
}

fn bench_rounds(c: &mut Criterion) {
    let start = GameBuilder::new(Ruleset::regular())
        .player_count(4)
        .build(42)
        .unwrap();

    c.bench_function("play_20_rounds_regular_4p", |b| {
        b.iter_batched(
            || (start.clone(), deciders(4)),
            |(mut game, mut deciders)| game.play_rounds(&mut deciders, black_box(20)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_clone(c: &mut Criterion) {
    let mut game = GameBuilder::new(Ruleset::beginner()).build(7).unwrap();
    let _ = game.play_rounds(&mut deciders(2), 15);

    c.bench_function("clone_midgame", |b| b.iter(|| black_box(&game).clone()));
}

criterion_group!(benches, bench_setup, bench_rounds, bench_clone);
criterion_main!(benches);
