use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use phyq_core::length::{Feet, Inches, Kilometres, Metres, Millimetres};
use phyq_core::time::Seconds;
use phyq_core::Milli;
use std::hint::black_box;

fn bench_cast(c: &mut Criterion) {
    let mut group = c.benchmark_group("cast");

    group.bench_function("metres_to_millimetres", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(black_box(Metres::new(i)).cast::<Milli>());
            }
        });
    });

    group.bench_function("feet_to_inches", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let inches: Inches = black_box(Feet::new(i)).cast();
                black_box(inches);
            }
        });
    });

    group.finish();
}

fn bench_mixed_ratio_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ratio_ops");

    group.bench_function("add_metres_millimetres", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(black_box(Metres::new(i)) + black_box(Millimetres::new(i)));
            }
        });
    });

    group.bench_function("compare_kilometres_metres", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(black_box(Kilometres::new(i)) < black_box(Metres::new(i * 999)));
            }
        });
    });

    group.finish();
}

fn bench_derived(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived");

    for n in [10i64, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("velocity", n), &n, |b, &n| {
            b.iter(|| black_box(Metres::new(n) * 100) / black_box(Seconds::new(36)));
        });
    }

    group.bench_function("checked_add_metres_millimetres", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let _ = black_box(black_box(Metres::new(i)).checked_add(black_box(Millimetres::new(i))));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cast, bench_mixed_ratio_ops, bench_derived);
criterion_main!(benches);
