use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quantum_ttt::core::{GameRng, GameState, Move, Position};
use quantum_ttt::search::{legal_moves, Minimax, SearchConfig, SearchModel};

fn midgame() -> GameState {
    let mut state = GameState::new();
    for (a, b) in [((0, 0), (1, 1)), ((0, 2), (2, 0)), ((1, 0), (2, 2))] {
        SearchModel::apply(
            &mut state,
            Move::Quantum(Position::new(a.0, a.1), Position::new(b.0, b.1)),
        );
    }
    state
}

fn bench_legal_moves_empty(c: &mut Criterion) {
    let state = GameState::new();
    c.bench_function("legal_moves_empty", |b| b.iter(|| legal_moves(black_box(&state))));
}

fn bench_search_depth_2(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("search_depth_2", |b| {
        b.iter(|| {
            let mut search = Minimax::new(SearchConfig::default().with_max_depth(2));
            search.search(black_box(&state), &mut GameRng::new(42))
        })
    });
}

fn bench_search_depth_3(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("search_depth_3", |b| {
        b.iter(|| {
            let mut search = Minimax::new(SearchConfig::default().with_max_depth(3));
            search.search(black_box(&state), &mut GameRng::new(42))
        })
    });
}

criterion_group!(benches, bench_legal_moves_empty, bench_search_depth_2, bench_search_depth_3);
criterion_main!(benches);
