use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nfaviz::prelude::*;

/// Highly ambiguous automaton: every `a` branches, acceptance requires a trailing `b`.
fn ambiguous() -> Nfa {
    let states = parse_states("-q0, q1, +q2");
    let groups = build_transitions([
        ("q0", "a", "q0"),
        ("q0", "a", "q1"),
        ("q1", "a", "q0"),
        ("q1", "b", "q2"),
    ])
    .unwrap();
    Nfa::from_parts(states, groups).unwrap()
}

fn bench_acceptance(c: &mut Criterion) {
    let nfa = ambiguous();
    // rejecting input, every branch of the exponential search is explored
    let input = "a".repeat(18);

    c.bench_function("dfs reject a^18", |b| {
        b.iter(|| nfa.accepts(black_box(&input)))
    });
    c.bench_function("memoized reject a^18", |b| {
        b.iter(|| nfa.accepts_memoized(black_box(&input)))
    });
}

criterion_group!(benches, bench_acceptance);
criterion_main!(benches);
