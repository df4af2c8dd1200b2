use criterion::{criterion_group, criterion_main, Criterion};
use sport_swipe::models::{DecisionDocument, HistoryOrder, Sport};
use sport_swipe::services::build_history_ordered;
use std::hint::black_box;

fn decisions(prefix: &str, count: usize) -> Vec<DecisionDocument> {
    let start = chrono::Utc::now();
    (0..count)
        .map(|i| {
            let sport = Sport::new(format!("{}{}", prefix, i), format!("Sport {}", i));
            // Spread decisions over time, out of retrieval order
            let offset = chrono::Duration::seconds(((i * 7919) % count) as i64);
            DecisionDocument::new(&sport, start - offset)
        })
        .collect()
}

fn benchmark_history_merge(c: &mut Criterion) {
    // A heavy user: every catalog sport decided several times over
    let liked = decisions("l", 2_000);
    let unliked = decisions("u", 1_500);

    let mut group = c.benchmark_group("history_merge");

    group.bench_function("interleaved", |b| {
        b.iter(|| {
            build_history_ordered(
                black_box(&liked),
                black_box(&unliked),
                HistoryOrder::Interleaved,
            )
        })
    });

    group.bench_function("chronological", |b| {
        b.iter(|| {
            build_history_ordered(
                black_box(&liked),
                black_box(&unliked),
                HistoryOrder::Chronological,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_history_merge);
criterion_main!(benches);
