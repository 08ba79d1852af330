use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tictac::board::Board;

fn bench_search(c: &mut Criterion) {
    // One reply already on the board keeps each iteration well under a second
    let mut b = Board::new(3, 3).expect("valid board");
    b.set(4, 0);
    c.bench_function("minimax_3x3_after_center", |ben| {
        ben.iter(|| {
            let mut s = tictac::search::Searcher::default();
            let r = s.search(black_box(&mut b), 1, 0);
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
