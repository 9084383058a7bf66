//! Benchmarks for bounded and hash collections.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mullion_core::collections::{BoundedVec, HashMap as AHashMap};
use std::collections::HashMap as StdHashMap;

fn bench_bounded_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_push");

    for size in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..size {
                    v.push(black_box(i));
                }
                v
            });
        });

        group.bench_with_input(BenchmarkId::new("bounded", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = BoundedVec::with_capacity(size);
                for i in 0..size {
                    let _ = v.push(black_box(i));
                }
                v
            });
        });
    }

    group.finish();
}

fn bench_bounded_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_get");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        let mut v = BoundedVec::with_capacity(size);
        for i in 0..size {
            let _ = v.push(i);
        }

        group.bench_with_input(BenchmarkId::new("checked", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0usize;
                for i in 0..size {
                    if let Some(&val) = v.get(black_box(i)) {
                        sum += val;
                    }
                }
                sum
            });
        });
    }

    group.finish();
}

fn bench_hashmap_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashmap_insert");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = StdHashMap::new();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            });
        });

        group.bench_with_input(BenchmarkId::new("ahash", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = AHashMap::new();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bounded_push,
    bench_bounded_get,
    bench_hashmap_insert
);
criterion_main!(benches);
