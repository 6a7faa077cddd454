// Rust guideline compliant 2026-10-19

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timestamps_core::{
    format_utcz, next_day_in, next_minute_mark, parse_utcz, partition_range, Instant,
};

const SAMPLE: &str = "2020-06-11T20:21:22.335Z";

fn bench_format_utcz(c: &mut Criterion) {
    let instant = Instant::from_millis(1_591_906_882_335);
    c.bench_function("format_utcz", |b| {
        b.iter(|| black_box(format_utcz(black_box(instant))))
    });
}

fn bench_parse_utcz(c: &mut Criterion) {
    c.bench_function("parse_utcz", |b| {
        b.iter(|| black_box(parse_utcz(black_box(SAMPLE))))
    });
}

fn bench_boundaries(c: &mut Criterion) {
    let now = Instant::from_millis(1_591_906_882_335);
    c.bench_function("next_minute_mark_5", |b| {
        b.iter(|| black_box(next_minute_mark(black_box(now), 5)))
    });
    c.bench_function("next_day_utc", |b| {
        b.iter(|| black_box(next_day_in(black_box(now), &chrono::Utc)))
    });
}

fn bench_partition_day(c: &mut Criterion) {
    c.bench_function("partition_day_by_minute", |b| {
        b.iter(|| {
            black_box(partition_range(
                "2020-01-01T00:00:00.000Z",
                "2020-01-02T00:00:00.000Z",
                1,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_format_utcz,
    bench_parse_utcz,
    bench_boundaries,
    bench_partition_day
);
criterion_main!(benches);
