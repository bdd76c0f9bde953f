//! Decode throughput per header layout.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tracker_core::prelude::*;

const TOKENS: &[(&str, &str)] = &[
    ("v1", "AKLwAH+dkkOBM4JTJ4J"),
    ("v2", "Aj0KAAAAAACsFZE9/05vcnRoQW1lcmljYQCDfSyCA0o"),
    ("v3_ipv6_full", "A8j///9NST1LJrgNASCIrYyAAIKULpvB5jQegjaDA4tiAY0GATUBAQEBAQERCgoIEAaQDpYwhyqFcQQ"),
    ("v3_ipv4", "A2D///9NST1LJgEBAQGCVIMDi2IBjQYBNQEBAQEBAREKCggQBpAOljCHKoVxBA"),
];

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker/decode");

    for (name, token) in TOKENS {
        group.bench_with_input(BenchmarkId::from_parameter(name), token, |b, token| {
            b.iter(|| TrackerHeader::decode(black_box(token)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
