use criterion::{criterion_group, criterion_main, Criterion};

use treesearch::boxes::{BoxesNode, GameState, Line, SearchLimits};
use treesearch::traversal;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta 2x2 depth 4", |b| b.iter(|| search(true)));
    c.bench_function("plain minimax 2x2 depth 4", |b| b.iter(|| search(false)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search(pruning: bool) -> usize {
    let mut state = GameState::new(2);
    state.apply(Line::horizontal(0, 0)).unwrap();
    state.apply(Line::vertical(1, 2)).unwrap();

    let root = BoxesNode::root(
        state,
        SearchLimits {
            depth_bound: 4,
            pruning,
        },
    );
    traversal::depth_first(root).count()
}
