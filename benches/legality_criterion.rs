use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_ledger::match_state::chess_types::PieceKind;
use chess_ledger::pieces::legal_move_checks::is_legal_move;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    kind: PieceKind,
    from: &'static str,
    to: &'static str,
    expected: bool,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "rook_along_rank",
        kind: PieceKind::Rook,
        from: "a1",
        to: "h1",
        expected: true,
    },
    BenchCase {
        name: "rook_off_line",
        kind: PieceKind::Rook,
        from: "a1",
        to: "b2",
        expected: false,
    },
    BenchCase {
        name: "bishop_long_diagonal",
        kind: PieceKind::Bishop,
        from: "a1",
        to: "h8",
        expected: true,
    },
    BenchCase {
        name: "bishop_off_diagonal",
        kind: PieceKind::Bishop,
        from: "a1",
        to: "a2",
        expected: false,
    },
    BenchCase {
        name: "king_single_step",
        kind: PieceKind::King,
        from: "b1",
        to: "a2",
        expected: true,
    },
    BenchCase {
        name: "king_long_step",
        kind: PieceKind::King,
        from: "b1",
        to: "h3",
        expected: false,
    },
];

fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");

    for case in CASES {
        // Correctness guard before benchmarking.
        assert_eq!(
            is_legal_move(case.kind, case.from, case.to),
            case.expected,
            "unexpected verdict for {}",
            case.name
        );

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, case| {
            b.iter(|| is_legal_move(black_box(case.kind), black_box(case.from), black_box(case.to)));
        });
    }

    group.finish();
}

criterion_group!(legality_benches, bench_legality);
criterion_main!(legality_benches);
