//! Cycle-accurate alloc/free latency of the slot pool vs boxed nodes, using rdtscp.
//!
//! Run with:
//!   cargo build --release --example perf_alloc_cycles -p slotpool
//!   taskset -c 0 ./target/release/examples/perf_alloc_cycles

use std::hint::black_box;

use hdrhistogram::Histogram;
use slotpool::ListPool;

const NODES: usize = 1_000_000;

#[inline(always)]
fn rdtscp() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        let mut aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut aux)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        panic!("rdtscp only supported on x86_64");
    }
}

fn print_stats(name: &str, hist: &Histogram<u64>) {
    println!("{}", name);
    println!("  min:  {:>6} cycles", hist.min());
    println!("  p50:  {:>6} cycles", hist.value_at_quantile(0.50));
    println!("  p99:  {:>6} cycles", hist.value_at_quantile(0.99));
    println!("  p999: {:>6} cycles", hist.value_at_quantile(0.999));
    println!("  max:  {:>6} cycles", hist.max());
    println!("  avg:  {:>6.0} cycles", hist.mean());
}

struct BoxNode {
    _value: i32,
    next: Option<Box<BoxNode>>,
}

fn bench_pool() -> (Histogram<u64>, Histogram<u64>) {
    let mut pool: ListPool<i32> = ListPool::new();
    let root = pool.push_root(0);
    let mut insert = Histogram::<u64>::new(3).unwrap();
    let mut remove = Histogram::<u64>::new(3).unwrap();

    for v in 0..NODES as i32 {
        let start = rdtscp();
        black_box(pool.insert_after(root, v));
        let end = rdtscp();
        let _ = insert.record(end.wrapping_sub(start));
    }

    for _ in 0..NODES {
        let start = rdtscp();
        black_box(pool.remove_after(root));
        let end = rdtscp();
        let _ = remove.record(end.wrapping_sub(start));
    }

    (insert, remove)
}

fn bench_boxed() -> (Histogram<u64>, Histogram<u64>) {
    let mut root = BoxNode {
        _value: 0,
        next: None,
    };
    let mut insert = Histogram::<u64>::new(3).unwrap();
    let mut remove = Histogram::<u64>::new(3).unwrap();

    for v in 0..NODES as i32 {
        let start = rdtscp();
        let next = root.next.take();
        root.next = Some(Box::new(BoxNode { _value: v, next }));
        let end = rdtscp();
        let _ = insert.record(end.wrapping_sub(start));
    }

    for _ in 0..NODES {
        let start = rdtscp();
        if let Some(mut node) = root.next.take() {
            root.next = node.next.take();
            black_box(node);
        }
        let end = rdtscp();
        let _ = remove.record(end.wrapping_sub(start));
    }

    (insert, remove)
}

fn main() {
    println!("INSERT/REMOVE latency comparison ({} nodes)", NODES);
    println!("========================================");
    println!();

    let (pool_insert, pool_remove) = bench_pool();
    let (box_insert, box_remove) = bench_boxed();

    print_stats("slotpool insert_after:", &pool_insert);
    println!();
    print_stats("box insert_after:", &box_insert);
    println!();
    print_stats("slotpool remove_after:", &pool_remove);
    println!();
    print_stats("box remove_after:", &box_remove);
    println!();

    let pool_p50 = pool_insert.value_at_quantile(0.50);
    let box_p50 = box_insert.value_at_quantile(0.50);

    println!("----------------------------------------");
    if pool_p50 < box_p50 {
        println!(
            "slotpool insert p50 is {:.1}% FASTER",
            (1.0 - pool_p50 as f64 / box_p50 as f64) * 100.0
        );
    } else if pool_p50 > box_p50 {
        println!(
            "slotpool insert p50 is {:.1}% SLOWER",
            (pool_p50 as f64 / box_p50 as f64 - 1.0) * 100.0
        );
    } else {
        println!("slotpool insert p50 is EQUAL");
    }
}
