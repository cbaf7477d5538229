//! Performance benchmarks for alignment and partitioning.
//!
//! Run with: `cargo bench --bench diff`
//!
//! The matcher is O((N+M)·D), so the interesting axis is edit density:
//! similar sequences (small D, the merge workload) versus heavy edits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nway_merge::{align, diff};

/// Deterministic pseudo-random sequence over a small alphabet.
fn base_sequence(len: usize) -> Vec<u32> {
    let mut state = 0x2545f491u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            state % 16
        })
        .collect()
}

/// Copy of `base` with one replacement every `stride` elements.
fn edited(base: &[u32], stride: usize, salt: u32) -> Vec<u32> {
    base.iter()
        .enumerate()
        .map(|(i, &v)| if i % stride == 0 { v ^ (salt | 16) } else { v })
        .collect()
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");

    for len in [100, 1_000, 10_000] {
        let ancestor = base_sequence(len);
        let candidate = edited(&ancestor, 50, 1);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new("sparse_edits", len),
            &(&ancestor, &candidate),
            |b, &(ancestor, candidate)| {
                b.iter(|| align(black_box(ancestor), black_box(candidate)))
            },
        );
    }

    group.finish();
}

fn bench_align_dissimilar(c: &mut Criterion) {
    let ancestor = base_sequence(500);
    let candidate = edited(&ancestor, 3, 7);

    c.bench_function("align_dense_edits", |b| {
        b.iter(|| align(black_box(&ancestor), black_box(&candidate)))
    });
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for len in [100, 1_000, 10_000] {
        let ancestor = base_sequence(len);
        let candidates = vec![
            edited(&ancestor, 97, 1),
            edited(&ancestor, 131, 2),
            edited(&ancestor, 173, 3),
        ];

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new("three_candidates", len),
            &(&ancestor, &candidates),
            |b, &(ancestor, candidates)| {
                b.iter(|| diff(black_box(ancestor), black_box(candidates)))
            },
        );
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let ancestor = base_sequence(10_000);
    let candidates = vec![
        edited(&ancestor, 97, 1),
        edited(&ancestor, 131, 2),
        edited(&ancestor, 173, 3),
    ];
    let result = diff(&ancestor, &candidates);

    c.bench_function("has_conflict", |b| {
        b.iter(|| black_box(&result).has_conflict())
    });
    c.bench_function("merge", |b| b.iter(|| black_box(&result).merge()));
}

criterion_group!(
    benches,
    bench_align,
    bench_align_dissimilar,
    bench_diff,
    bench_reduce,
);
criterion_main!(benches);
