//! Benchmarks for minirel-index using criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minirel_index::{BPlusTree, Index, IndexKind, IndexOptions, LinHashMap, OrderedIndex};

const KINDS: [IndexKind; 3] = [IndexKind::LinearHash, IndexKind::Tree, IndexKind::Range];

fn index_put_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_put");

    for kind in KINDS {
        for size in [100u64, 1000, 10000] {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, &size| {
                b.iter(|| {
                    let mut index = kind.build::<u64, u64>(IndexOptions::default());
                    for i in 0..size {
                        index.put(i, i);
                    }
                    black_box(index)
                });
            });
        }
    }

    group.finish();
}

fn index_get_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_get");

    for kind in KINDS {
        let size = 10000u64;
        let mut index = kind.build::<u64, u64>(IndexOptions::default());
        for i in 0..size {
            index.put(i, i);
        }

        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                for i in (0..100).map(|x| x * size / 100) {
                    black_box(index.get(&i));
                }
            });
        });
        println!(
            "{}: {:.2} buckets accessed per lookup",
            kind,
            index.stats().average_buckets_accessed()
        );
    }

    group.finish();
}

fn linhash_initial_buckets_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("linhash_initial_buckets");

    for buckets in [1usize, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(buckets), &buckets, |b, &buckets| {
            b.iter(|| {
                let mut map = LinHashMap::with_buckets(buckets);
                for i in 0..10000u32 {
                    map.put(i, i);
                }
                black_box(map.overflow_buckets())
            });
        });
    }

    group.finish();
}

fn bplustree_range_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bplustree_range");

    let mut tree = BPlusTree::new(32);
    for i in 0..100000i64 {
        tree.put(i, i);
    }

    for range_size in [100i64, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(range_size),
            &range_size,
            |b, &range_size| {
                b.iter(|| black_box(tree.range(&50000, &(50000 + range_size)).len()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    index_put_benchmark,
    index_get_benchmark,
    linhash_initial_buckets_benchmark,
    bplustree_range_benchmark
);
criterion_main!(benches);
