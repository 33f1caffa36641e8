//! Benchmark for serde serialization/deserialization of SortedSet.
//!
//! Compares against `BTreeSet`, which also serializes as a JSON array.
//! Deserializing a SortedSet sorts and deduplicates, so both sorted and
//! scrambled payloads are measured.

use cset::SortedSet;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use std::hint::black_box;

// =============================================================================
// Serialize
// =============================================================================

fn benchmark_serialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_serialize_sorted_set");

    for size in [100, 1000, 10000] {
        let sorted_set: SortedSet<i32> = (0..size).collect();
        let tree_set: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("SortedSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                let json = serde_json::to_string(&sorted_set).unwrap();
                black_box(json)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                let json = serde_json::to_string(&tree_set).unwrap();
                black_box(json)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Deserialize
// =============================================================================

fn benchmark_deserialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_deserialize_sorted_set");

    for size in [100, 1000, 10000] {
        let sorted: Vec<i32> = (0..size).collect();
        let scrambled: Vec<i32> = (0..size).rev().collect();
        let sorted_json = serde_json::to_string(&sorted).unwrap();
        let scrambled_json = serde_json::to_string(&scrambled).unwrap();

        group.bench_with_input(
            BenchmarkId::new("SortedSet_sorted", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let set: SortedSet<i32> = serde_json::from_str(&sorted_json).unwrap();
                    black_box(set)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("SortedSet_scrambled", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let set: SortedSet<i32> = serde_json::from_str(&scrambled_json).unwrap();
                    black_box(set)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                let set: BTreeSet<i32> = serde_json::from_str(&scrambled_json).unwrap();
                black_box(set)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_serialize, benchmark_deserialize);
criterion_main!(benches);
