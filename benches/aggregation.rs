//! Benchmarks for hosts parsing and aggregation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hostsgen::aggregator::aggregate;
use hostsgen::allowlist::filter_allowed;
use hostsgen::parser::parse_hosts;
use std::hint::black_box;

/// Generate a hosts payload with some comments and loopback lines
fn generate_payload(count: usize, offset: usize) -> String {
    let mut payload = String::from("# Generated blocklist\n\n");
    for i in 0..count {
        let ip = if i % 3 == 0 { "127.0.0.1" } else { "0.0.0.0" };
        payload.push_str(&format!("{}\tads{}.example{}.com  # entry\n", ip, i + offset, i % 97));
    }
    payload
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_hosts");

    for size in [1000, 10000, 100000] {
        let payload = generate_payload(size, 0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| black_box(parse_hosts(payload.as_bytes())));
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [1000, 10000, 100000] {
        // Half of each source overlaps with the previous one
        let payloads: Vec<String> = (0..4).map(|i| generate_payload(size, i * size / 2)).collect();
        group.bench_with_input(BenchmarkId::new("four_sources", size), &payloads, |b, payloads| {
            b.iter(|| black_box(aggregate(payloads)));
        });
    }

    group.finish();
}

fn bench_filter_allowed(c: &mut Criterion) {
    let entries = aggregate(&[generate_payload(50000, 0)]);
    let allow: Vec<String> = (0..500).map(|i| format!("https://ads{}.example{}.com", i * 7, (i * 7) % 97)).collect();

    c.bench_function("filter_allowed_50k", |b| {
        b.iter(|| black_box(filter_allowed(entries.clone(), &allow)));
    });
}

criterion_group!(benches, bench_parse, bench_aggregate, bench_filter_allowed);
criterion_main!(benches);
