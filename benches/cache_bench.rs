//! Benchmarks for caching and comparison.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use diff_cache::{compare, Cache, CacheConfig, CacheError, CacheKey, DiffKind};

/// Benchmark single-threaded cache lookups.
fn bench_single_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_threaded");

    let cache: Cache<String> = Cache::new(CacheConfig::new().max_size(100_000).build());
    let keys: Vec<CacheKey> = (0..10_000)
        .map(|i| CacheKey::derive("bench", &i).unwrap())
        .collect();
    for (i, key) in keys.iter().enumerate() {
        cache.insert(key, format!("value_{}", i));
    }

    group.bench_function("get_or_compute_hit", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = &keys[i % keys.len()];
            black_box(
                cache
                    .get_or_compute(key, || Ok::<_, CacheError>(String::new()))
                    .unwrap(),
            );
            i += 1;
        });
    });

    group.bench_function("key_derivation", |b| {
        let mut i = 0u64;
        b.iter(|| {
            black_box(CacheKey::derive("review_code", &("fn main() {}", "rust", i)).unwrap());
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark concurrent get_or_compute.
fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");

    for num_threads in [2, 4, 8].iter() {
        let cache: Cache<String> = Cache::new(CacheConfig::new().max_size(100_000).build());
        let keys: Vec<CacheKey> = (0..10_000)
            .map(|i| CacheKey::derive("bench", &i).unwrap())
            .collect();

        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(
            BenchmarkId::new("mixed_ops", num_threads),
            num_threads,
            |b, &num_threads| {
                b.iter(|| {
                    let handles: Vec<_> = (0..num_threads)
                        .map(|t| {
                            let cache = cache.clone();
                            let keys = keys.clone();
                            std::thread::spawn(move || {
                                for i in 0..1000 {
                                    let key = &keys[(t * 1000 + i) % keys.len()];
                                    black_box(
                                        cache
                                            .get_or_compute(key, || {
                                                Ok::<_, CacheError>("value".to_string())
                                            })
                                            .unwrap(),
                                    );
                                }
                            })
                        })
                        .collect();

                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark eviction under pressure.
fn bench_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");

    let cache: Cache<&'static str> = Cache::new(CacheConfig::new().max_size(1000).build());
    for i in 0..1000 {
        cache.insert(&CacheKey::derive("bench", &i).unwrap(), "value");
    }

    group.bench_function("insert_with_eviction", |b| {
        let mut i = 1000;
        b.iter(|| {
            cache.insert(&CacheKey::derive("bench", &i).unwrap(), "value");
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark comparisons of growing inputs.
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for rows in [100usize, 1_000, 10_000].iter() {
        let a: String = std::iter::once("id,name\n".to_string())
            .chain((0..*rows).map(|i| format!("{},name_{}\n", i, i)))
            .collect();
        let b: String = std::iter::once("id,name\n".to_string())
            .chain((0..*rows).map(|i| format!("{},name_{}\n", i + rows / 2, i)))
            .collect();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("tabular", rows), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(compare(DiffKind::Tabular, a, b).unwrap()));
        });
    }

    let json_a: String = format!(
        "[{}]",
        (0..1000)
            .map(|i| format!(r#"{{"id":{},"tags":{{"b":1,"a":2}}}}"#, i))
            .collect::<Vec<_>>()
            .join(",")
    );
    group.bench_function("json_array_1000", |bench| {
        bench.iter(|| black_box(compare(DiffKind::Json, &json_a, &json_a).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_threaded,
    bench_concurrent,
    bench_eviction,
    bench_compare,
);
criterion_main!(benches);
