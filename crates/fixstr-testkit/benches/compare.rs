//! Benchmarks for the hot paths: set, append, and compare.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fixstr::FixedString;
use fixstr_testkit::fixtures::digits;

fn bench_set(c: &mut Criterion) {
    let input = [b'x'; 100];
    let mut group = c.benchmark_group("set");

    group.bench_function("fits", |b| {
        let mut s = FixedString::<128>::new();
        b.iter(|| s.set(black_box(&input)))
    });
    group.bench_function("truncates", |b| {
        let mut s = FixedString::<32>::new();
        b.iter(|| s.set(black_box(&input)))
    });

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    group.bench_function("until_full", |b| {
        b.iter(|| {
            let mut s = FixedString::<128>::new();
            while s.append(black_box(b"abcdefgh")).is_ok() {}
            s
        })
    });
    group.bench_function("refused", |b| {
        let mut s = FixedString::<8>::from("abcdefg");
        b.iter(|| s.append(black_box(b"hi")))
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let a: FixedString<128> = digits(120);
    let mut b = a;
    if let Some(last) = b.back_mut() {
        *last = b'~';
    }
    let c_same: FixedString<64> = digits(60);

    let mut group = c.benchmark_group("compare");

    group.bench_function("differ_at_end", |bench| {
        bench.iter(|| black_box(&a).compare(black_box(&b)))
    });
    group.bench_function("eq_cross_capacity", |bench| {
        bench.iter(|| black_box(&a) == black_box(&c_same))
    });
    group.bench_function("against_str", |bench| {
        bench.iter(|| black_box(&c_same).compare(black_box("012345678901234567890123456789")))
    });

    group.finish();
}

criterion_group!(benches, bench_set, bench_append, bench_compare);
criterion_main!(benches);
