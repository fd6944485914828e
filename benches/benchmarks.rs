//! Performance benchmarks for log reconciliation
//!
//! Run with: cargo bench

use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use reviews_reconcile::reconcile::{
    occurrence_counts, scan_str, IdentifierPattern, PatternPreset, Reconciliation,
};

/// Request log lines in the shape the product page returns
fn request_log(lines: usize, pods: usize) -> String {
    (0..lines)
        .map(|i| {
            format!(
                "<div class=\"reviews\"><dd>reviews-v{}-{:08x}</dd><p>An extremely entertaining play</p></div>\n",
                i % 3 + 1,
                i % pods
            )
        })
        .collect()
}

/// Benchmark identifier extraction for both presets
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for line_count in [100, 1_000, 10_000].iter() {
        let log = request_log(*line_count, 12);
        group.throughput(Throughput::Elements(*line_count as u64));

        for preset in [PatternPreset::PodName, PatternPreset::Version] {
            let pattern = IdentifierPattern::from_preset(preset).unwrap();
            group.bench_with_input(
                BenchmarkId::new(preset.to_string(), line_count),
                &log,
                |b, log| {
                    b.iter(|| scan_str(black_box(log), &pattern));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark set comparison and occurrence counting
fn bench_reconciliation(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconciliation");

    for pod_count in [3, 30, 300].iter() {
        let pattern = IdentifierPattern::from_preset(PatternPreset::PodName).unwrap();
        let requests = scan_str(&request_log(pod_count * 20, *pod_count), &pattern);
        let expected: BTreeSet<String> = requests.unique().clone();

        group.bench_with_input(
            BenchmarkId::new("compute", pod_count),
            &expected,
            |b, expected| {
                b.iter(|| {
                    Reconciliation::compute(black_box(expected.clone()), requests.unique().clone())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("occurrence_counts", pod_count),
            &expected,
            |b, expected| {
                b.iter(|| occurrence_counts(black_box(expected), requests.raw()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_reconciliation);
criterion_main!(benches);
