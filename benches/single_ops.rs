use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mex_trie::MexTrie;
use std::collections::BTreeSet;

/// Linear mex scan over a BTreeSet, the baseline the trie replaces.
fn btree_mex(set: &BTreeSet<u32>) -> u32 {
    let mut expected = 0;
    for &key in set {
        if key != expected {
            break;
        }
        expected += 1;
    }
    expected
}

fn filled_trie(size: u32) -> MexTrie<u32> {
    MexTrie::from_keys(0..size).unwrap()
}

/// Benchmark single add operation with varying dataset sizes
fn bench_single_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_add");

    // Test how add performance changes as dataset grows
    for size in [100, 1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("MexTrie", size), size, |b, &size| {
            let mut trie = filled_trie(size);
            let next_key = size;

            b.iter(|| {
                black_box(trie.add(next_key).unwrap());
                trie.remove(next_key).unwrap(); // Clean up for next iteration
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, &size| {
            let mut btree: BTreeSet<u32> = (0..size).collect();
            let next_key = size;

            b.iter(|| {
                black_box(btree.insert(next_key));
                btree.remove(&next_key);
            });
        });
    }

    group.finish();
}

/// Benchmark single contains operation with varying dataset sizes
fn bench_single_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_contains");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("MexTrie_hit", size), size, |b, &size| {
            let trie = filled_trie(size);
            let lookup_key = size / 2;

            b.iter(|| black_box(trie.contains(lookup_key)));
        });

        group.bench_with_input(BenchmarkId::new("MexTrie_miss", size), size, |b, &size| {
            let trie = filled_trie(size);
            let lookup_key = size + 1000;

            b.iter(|| black_box(trie.contains(lookup_key)));
        });
    }

    group.finish();
}

/// Benchmark single remove operation with varying dataset sizes
fn bench_single_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_remove");

    for size in [100, 1_000, 10_000].iter() {
        // Remove from the middle breaks a chain of full flags
        group.bench_with_input(BenchmarkId::new("MexTrie", size), size, |b, &size| {
            b.iter_batched(
                || (filled_trie(size), size / 2),
                |(mut trie, key)| black_box(trie.remove(key).unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the mex query: trie descent vs linear scan
fn bench_next_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_int");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("MexTrie", size), size, |b, &size| {
            let trie = filled_trie(size);
            b.iter(|| black_box(trie.next_int()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet_scan", size), size, |b, &size| {
            let btree: BTreeSet<u32> = (0..size).collect();
            b.iter(|| black_box(btree_mex(&btree)));
        });
    }

    group.finish();
}

/// Benchmark allocate/free churn, the id-allocator workload
fn bench_allocate_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_churn");

    group.bench_function("MexTrie_10000", |b| {
        let mut trie = filled_trie(10_000);
        let mut victim = 0u32;

        b.iter(|| {
            trie.remove(victim).unwrap();
            black_box(trie.allocate().unwrap());
            victim = (victim + 7919) % 10_000;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_add,
    bench_single_contains,
    bench_single_remove,
    bench_next_int,
    bench_allocate_churn,
);
criterion_main!(benches);
