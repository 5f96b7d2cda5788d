//! Benchmarks for push and fan-out on the hot path.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rillflow::{connect, Filter, Gate, OutputHub};

fn bench_hub_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("hub_push");
    for subscribers in [1usize, 4, 16] {
        let hub = OutputHub::<u64>::new();
        for _ in 0..subscribers {
            hub.subscribe(|value, _tag| {
                black_box(value);
            });
        }
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("fanout_{subscribers}"), |b| {
            b.iter(|| hub.push(black_box(7), None))
        });
    }
    group.finish();
}

fn bench_filter_gate_chain(c: &mut Criterion) {
    let filter = Filter::<u64>::new(|value, _tag| Ok(*value % 2 == 0));
    let gate = Gate::<u64>::new(true);
    connect(&filter.o.forwarded, &gate.i.value);
    gate.o.value.subscribe(|value, _tag| {
        black_box(value);
    });

    c.bench_function("filter_gate_chain", |b| {
        b.iter(|| filter.i.value.push(black_box(8), None))
    });
}

criterion_group!(benches, bench_hub_fanout, bench_filter_gate_chain);
criterion_main!(benches);
