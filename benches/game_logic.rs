use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{create_piece, Board, Game, NullEvents};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_clear_cycle(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(PieceKind::I));
                }
            }
            board.start_clearing(&mut NullEvents);
            while board.advance_clearing(&mut NullEvents) {}
            black_box(&board);
        })
    });
}

fn bench_piece_fall(c: &mut Criterion) {
    c.bench_function("piece_fall_to_floor", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut piece = create_piece(PieceKind::T);
            while piece.fall(&mut board, &mut NullEvents)
                == blockfall::core::FallStatus::CanFall
            {}
            black_box(piece.y());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = create_piece(PieceKind::L);
    piece.set_x(4);
    piece.set_y(8);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            piece.rotate(black_box(1), &board);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_cycle,
    bench_piece_fall,
    bench_rotate
);
criterion_main!(benches);
