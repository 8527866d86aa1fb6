use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heapbench::{BuildPolicy, MaxHeap, MinHeap};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_max_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("max");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("heapify", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut heap = MaxHeap::new();
                    heap.build_heap(n, BuildPolicy::AppendOnly);
                    heap
                },
                |mut heap| {
                    heap.heapify();
                    black_box(heap.root())
                },
                criterion::BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("siftup", n), &n, |b, &n| {
            b.iter(|| {
                let mut heap = MaxHeap::new();
                heap.build_heap(black_box(n), BuildPolicy::Incremental);
                black_box(heap.root())
            })
        });
    }
    group.finish();
}

fn bench_min_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("min");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("heapify", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut heap = MinHeap::new();
                    heap.build_heap(n, BuildPolicy::AppendOnly);
                    heap
                },
                |mut heap| {
                    heap.heapify();
                    black_box(heap.root())
                },
                criterion::BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("siftup", n), &n, |b, &n| {
            b.iter(|| {
                let mut heap = MinHeap::new();
                heap.build_heap(black_box(n), BuildPolicy::Incremental);
                black_box(heap.root())
            })
        });
    }
    group.finish();
}

criterion_group!(
    name = construction_benchmarks;
    config = Criterion::default().sample_size(20);
    targets =
        bench_max_construction,
        bench_min_construction
);
criterion_main!(construction_benchmarks);
