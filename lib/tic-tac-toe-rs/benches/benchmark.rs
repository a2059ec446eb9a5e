use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use std::time::Duration;
use tic_tac_toe::{
    Board,
    Mark,
};

fn criterion_benchmark(c: &mut Criterion) {
    let board = Board::new();
    let options = board.legal_moves();

    c.bench_function("search empty board", |b| {
        b.iter(|| {
            tic_tac_toe::search(
                black_box(board),
                black_box(&options),
                black_box(Mark::Opponent),
            )
        })
    });

    let board = board.set(4, Some(Mark::Player));
    let options = board.legal_moves();
    c.bench_function("select reply to center", |b| {
        b.iter(|| tic_tac_toe::select_move(black_box(board), black_box(&options)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
