use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::game_state::position::Position;
use plum_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_rules::search::board_scoring::MaterialPositionalScorer;
use plum_rules::search::negamax::{search, SearchConfig};

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
    },
    SearchCase {
        name: "classical_mid",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    },
    SearchCase {
        name: "tactical",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    SearchCase {
        name: "end_kpk",
        fen: "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1",
    },
];

fn bench_search(c: &mut Criterion) {
    let depth = std::env::var("PLUM_SEARCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(3)
        .max(1);

    let mut group = c.benchmark_group("negamax_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let generator = LegalMoveGenerator;
    let scorer = MaterialPositionalScorer;

    for pruning in [true, false] {
        let config = SearchConfig {
            depth,
            pruning,
            shuffle_root: false,
        };
        let label = if pruning { "alpha_beta" } else { "minimax" };

        for case in CASES {
            let position = Position::from_fen(case.fen).expect("benchmark FEN should parse");
            group.bench_with_input(
                BenchmarkId::new(format!("{}_{label}", case.name), format!("d{depth}")),
                &position,
                |b, position| {
                    b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(0);
                        let result = search(
                            black_box(position),
                            &generator,
                            &scorer,
                            black_box(config),
                            &mut rng,
                        )
                        .expect("search should run");
                        black_box(result.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
