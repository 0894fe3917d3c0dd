//! Benchmarks for move generation and perft.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::Board;
use chess_rules::game::{Game, GameConfig, RandomAdvisor};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn parse(fen: &str) -> Board {
    Board::try_from_fen(fen).expect("benchmark FEN is valid")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let kiwipete = parse(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, board) in [
        ("startpos", Board::new()),
        ("middlegame", parse(MIDDLEGAME)),
        ("kiwipete", parse(KIWIPETE)),
    ] {
        group.bench_function(format!("pseudo_legal/{name}"), |b| {
            b.iter(|| black_box(board.generate_pseudo_legal_moves()))
        });
        group.bench_function(format!("legal/{name}"), |b| {
            b.iter(|| black_box(board.generate_legal_moves()))
        });
    }

    group.finish();
}

fn bench_fen(c: &mut Criterion) {
    let board = parse(KIWIPETE);
    c.bench_function("fen/parse", |b| {
        b.iter(|| Board::try_from_fen(black_box(KIWIPETE)))
    });
    c.bench_function("fen/write", |b| b.iter(|| black_box(&board).to_fen()));
}

fn bench_self_play(c: &mut Criterion) {
    c.bench_function("game/random_self_play_100", |b| {
        b.iter(|| {
            let config = GameConfig {
                seed: Some(3),
                ..GameConfig::default()
            };
            let mut game = Game::new(config);
            let mut advisor = RandomAdvisor::new(Some(3));
            black_box(game.autoplay(&mut advisor, 100).len())
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_fen, bench_self_play);
criterion_main!(benches);
