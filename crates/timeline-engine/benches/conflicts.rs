//! Benchmarks for overlap detection on busy days.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use timeline_engine::{check_for_conflicts, find_conflict_pairs, Event, EventId};

/// `n` half-hour events starting every 20 minutes from 06:00, so neighbours overlap.
fn staggered_day(n: u32) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let start = 360 + (i * 20) % 1000;
            Event {
                id: EventId(u64::from(i)),
                name: format!("Block {i}"),
                start,
                end: start + 30,
            }
        })
        .collect()
}

fn bench_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflicts");
    for n in [10u32, 50, 200] {
        let events = staggered_day(n);
        group.bench_with_input(BenchmarkId::new("check_for_conflicts", n), &events, |b, ev| {
            b.iter(|| check_for_conflicts(black_box(ev)).len())
        });
        group.bench_with_input(BenchmarkId::new("find_conflict_pairs", n), &events, |b, ev| {
            b.iter(|| find_conflict_pairs(black_box(ev)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_conflicts);
criterion_main!(benches);
