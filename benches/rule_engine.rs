//! Benchmarks for rule adjudication and whole bot matches.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use snald_engine::core::{PlayerId, PlayerMap};
use snald_engine::games::{LudoGameBuilder, SnaldGameBuilder, TurnController};
use snald_engine::{GamePhase, GreedyBot, LudoPlayer, LudoRuleEngine, SnaldRuleEngine, TokenPos};

fn crowded_table() -> PlayerMap<LudoPlayer> {
    let spread = |id: u8, offset: u8| {
        let positions: Vec<TokenPos> = (0..4).map(|t| TokenPos::Track(offset + t * 11)).collect();
        LudoPlayer::with_positions(PlayerId::new(id), &positions, false)
    };
    PlayerMap::from_records(vec![spread(0, 2), spread(1, 5), spread(2, 9), spread(3, 13)])
        .expect("four seats")
}

fn bench_snald_rules(c: &mut Criterion) {
    let engine = SnaldRuleEngine::new();

    c.bench_function("snald_calculate_move", |b| {
        b.iter(|| {
            for position in 1..=99u8 {
                for roll in 1..=6u8 {
                    black_box(engine.calculate_move(black_box(position), roll, 1, false));
                }
            }
        });
    });

    c.bench_function("snald_hunter_move", |b| {
        b.iter(|| {
            for start in 1..=100u8 {
                black_box(engine.calculate_hunter_move(black_box(start), 6));
            }
        });
    });
}

fn bench_ludo_rules(c: &mut Criterion) {
    let engine = LudoRuleEngine::new();
    let bot = GreedyBot::new();
    let players = crowded_table();

    c.bench_function("ludo_legal_tokens", |b| {
        b.iter(|| {
            for roll in 1..=6u8 {
                black_box(engine.legal_tokens(PlayerId::new(0), roll, black_box(&players), None));
            }
        });
    });

    c.bench_function("ludo_bot_best_move", |b| {
        b.iter(|| {
            for roll in 1..=6u8 {
                black_box(bot.best_move(PlayerId::new(1), roll, black_box(&players), None));
            }
        });
    });
}

fn bench_matches(c: &mut Criterion) {
    c.bench_function("snald_match_4p", |b| {
        b.iter(|| {
            let mut game = SnaldGameBuilder::new().player_count(4).build(black_box(42));
            while !game.is_over() {
                let _ = game.roll_dice();
                let _ = game.on_animations_finished();
            }
            black_box(game.result())
        });
    });

    c.bench_function("ludo_bot_match_4p", |b| {
        b.iter(|| {
            let mut game = LudoGameBuilder::new()
                .player_count(4)
                .bot_count(4)
                .build(black_box(42));
            while !game.is_over() {
                game.tick();
                let _ = match game.phase() {
                    GamePhase::Animating => game.on_animations_finished().map(|_| ()),
                    _ => game.roll_dice().map(|_| ()),
                };
            }
            black_box(game.result())
        });
    });
}

criterion_group!(benches, bench_snald_rules, bench_ludo_rules, bench_matches);
criterion_main!(benches);
