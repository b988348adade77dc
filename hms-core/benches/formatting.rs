use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hms_core::{format_hms, format_hms_vec, parse_hms, parse_hms_vec, HmsVec};

fn sample(size: usize) -> HmsVec {
    (0..size)
        .map(|i| hms_core::Hms::from_seconds(i as f64 * 37.25 - 1_000.0))
        .collect()
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("single", |b| {
        b.iter(|| format_hms(black_box(hms_core::Hms::from_seconds(45_026.5))))
    });

    for size in [16, 256, 4096] {
        let values = sample(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, v| {
            b.iter(|| format_hms_vec(black_box(v)));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("single", |b| b.iter(|| parse_hms(black_box("12:30:26.5"))));

    for size in [16, 256, 4096] {
        let text = format_hms_vec(&sample(size));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, t| {
            b.iter(|| parse_hms_vec(black_box(t)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_format, bench_parse);
criterion_main!(benches);
