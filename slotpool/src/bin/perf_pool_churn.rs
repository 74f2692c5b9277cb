//! Profiling binary for churn (alloc/free cycles) over a half-full pool.
//!
//! Run with:
//!   cargo build --release --bin perf_pool_churn
//!   perf stat -e cycles,instructions,cache-misses,cache-references \
//!       ./target/release/perf_pool_churn

use std::hint::black_box;

const CAPACITY: usize = 1 << 16;
const CYCLES: usize = 10_000_000;

fn main() {
    let mut pool: slotpool::SlotPool<u64> = slotpool::SlotPool::with_capacity(CAPACITY);
    for i in 0..(CAPACITY / 2) as u64 {
        pool.insert(i);
    }

    // Timed section: take the lowest free slot, then release it
    for i in 0..CYCLES as u64 {
        let key = pool.insert(i);
        black_box(pool.remove(key));
    }
}
