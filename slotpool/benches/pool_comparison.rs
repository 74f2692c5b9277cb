//! Benchmarks comparing pool-allocated list nodes against boxed nodes and the
//! slab crate.
//!
//! Run with: cargo bench -p slotpool

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use slotpool::{ListPool, SlotPool};

const NODES: usize = 100_000;

// ============================================================================
// Baselines
// ============================================================================

struct BoxNode {
    value: i32,
    next: Option<Box<BoxNode>>,
}

/// Boxed list with an explicit root. Drops iteratively so long chains don't
/// recurse.
struct BoxList {
    root: BoxNode,
}

impl BoxList {
    fn new() -> Self {
        Self {
            root: BoxNode {
                value: 0,
                next: None,
            },
        }
    }

    fn insert_after_root(&mut self, value: i32) {
        let next = self.root.next.take();
        self.root.next = Some(Box::new(BoxNode { value, next }));
    }

    fn sum(&self) -> i64 {
        let mut sum = 0i64;
        let mut cursor = Some(&self.root);
        while let Some(node) = cursor {
            sum += node.value as i64;
            cursor = node.next.as_deref();
        }
        sum
    }
}

impl Drop for BoxList {
    fn drop(&mut self) {
        let mut cursor = self.root.next.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

const SLAB_NULL: usize = usize::MAX;

fn slab_insert_after(slab: &mut slab::Slab<(i32, usize)>, at: usize, value: i32) -> usize {
    let next = slab[at].1;
    let new = slab.insert((value, next));
    slab[at].1 = new;
    new
}

// ============================================================================
// Insert
// ============================================================================

fn bench_insert_after(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_after_root");
    group.throughput(Throughput::Elements(NODES as u64));

    group.bench_function("slotpool", |b| {
        b.iter(|| {
            let mut pool: ListPool<i32> = ListPool::new();
            let root = pool.push_root(0);
            for v in 0..NODES as i32 {
                black_box(pool.insert_after(root, v));
            }
            pool
        });
    });

    group.bench_function("slotpool/presized", |b| {
        b.iter(|| {
            let mut pool: ListPool<i32> = ListPool::with_capacity(NODES + 2);
            let root = pool.push_root(0);
            for v in 0..NODES as i32 {
                black_box(pool.insert_after(root, v));
            }
            pool
        });
    });

    group.bench_function("box", |b| {
        b.iter(|| {
            let mut list = BoxList::new();
            for v in 0..NODES as i32 {
                list.insert_after_root(v);
            }
            list
        });
    });

    group.bench_function("slab", |b| {
        b.iter(|| {
            let mut slab = slab::Slab::new();
            let root = slab.insert((0, SLAB_NULL));
            for v in 0..NODES as i32 {
                black_box(slab_insert_after(&mut slab, root, v));
            }
            slab
        });
    });

    group.finish();
}

// ============================================================================
// Traverse
// ============================================================================

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    group.throughput(Throughput::Elements(NODES as u64));

    let mut pool: ListPool<i32> = ListPool::new();
    let root = pool.push_root(0);
    for v in 0..NODES as i32 {
        pool.insert_after(root, v);
    }

    let mut boxed = BoxList::new();
    for v in 0..NODES as i32 {
        boxed.insert_after_root(v);
    }

    group.bench_function("slotpool", |b| {
        b.iter(|| {
            pool.iter_from(root)
                .map(|(_, v)| *v as i64)
                .sum::<i64>()
        });
    });

    group.bench_function("box", |b| b.iter(|| black_box(boxed.sum())));

    group.finish();
}

// ============================================================================
// Churn (alloc + free)
// ============================================================================

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    const OPS: usize = 10_000;
    group.throughput(Throughput::Elements(OPS as u64));

    // Half-full pools so the scan has occupied runs to skip.
    let mut pool: SlotPool<u64> = SlotPool::with_capacity(NODES);
    let keys: Vec<u32> = (0..NODES as u64 / 2).map(|i| pool.insert(i)).collect();
    for k in keys.iter().step_by(7) {
        pool.free(*k);
    }

    let mut slab_crate = slab::Slab::<u64>::with_capacity(NODES);
    let slab_keys: Vec<usize> = (0..NODES as u64 / 2).map(|i| slab_crate.insert(i)).collect();
    for k in slab_keys.iter().step_by(7) {
        slab_crate.remove(*k);
    }

    group.bench_function("slotpool", |b| {
        b.iter(|| {
            for i in 0..OPS as u64 {
                let k = pool.insert(i);
                black_box(pool.remove(k));
            }
        });
    });

    group.bench_function("slab", |b| {
        b.iter(|| {
            for i in 0..OPS as u64 {
                let k = slab_crate.insert(i);
                black_box(slab_crate.remove(k));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert_after, bench_traverse, bench_churn);
criterion_main!(benches);
