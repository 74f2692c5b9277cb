//! The seeded insert/delete script, run against one variant.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::{BenchConfig, BenchError, Checksum, HeapNoise, NOISE_SEED, Stats, Variant, checksum};

/// Size of the heads cache.
pub const HEADS: usize = 1000;

/// A new node replaces a cached head once in this many inserts.
pub const REPLACE_CHANCE: u32 = 128;

/// A delete is attempted once in this many delete iterations.
pub const DELETE_CHANCE: u32 = 8;

/// Heap perturbation runs once in this many inserts (when enabled).
pub const PERTURB_CHANCE: u32 = 32;

/// Seed for every insert phase.
pub const INSERT_SEED: u64 = 0xBEEF;

/// Seed for every delete phase.
pub const DELETE_SEED: u64 = 0xFEED_BEEF;

/// Everything one variant's run owns.
///
/// The heads cache holds handles to live nodes. Removing a node clears the
/// cache entry that could point at it (`value % HEADS`) before anything else
/// is allocated, so a reused pool slot is never mistaken for the old node.
#[derive(Debug)]
pub struct Workload<L: Variant> {
    list: L,
    heads: Box<[Option<L::Handle>]>,
    next_value: u32,
    iters: usize,
    stats: Stats,
    noise: Option<HeapNoise>,
}

impl<L: Variant> Workload<L> {
    /// Creates a list holding only a root with value 0.
    pub fn new(config: &BenchConfig) -> Result<Self, BenchError> {
        Ok(Self {
            list: L::with_root(0),
            heads: vec![None; HEADS].into_boxed_slice(),
            next_value: 1,
            iters: config.iters,
            stats: Stats::new()?,
            noise: config.perturb_heap.then(|| HeapNoise::new(NOISE_SEED)),
        })
    }

    /// Runs one insert phase.
    pub fn run_inserts(&mut self) {
        let mut rng = StdRng::seed_from_u64(INSERT_SEED);
        let start = Instant::now();
        for _ in 0..self.iters {
            self.insert_step(rng.next_u32());
        }
        self.stats.insert_time += start.elapsed();
        tracing::debug!(variant = L::NAME, len = self.list.len(), "inserts done");
    }

    /// Runs one delete phase.
    pub fn run_deletes(&mut self) {
        let mut rng = StdRng::seed_from_u64(DELETE_SEED);
        let start = Instant::now();
        for _ in 0..self.iters {
            self.delete_step(rng.next_u32());
        }
        self.stats.delete_time += start.elapsed();
        tracing::debug!(variant = L::NAME, len = self.list.len(), "deletes done");
    }

    /// Digests the list in traversal order.
    pub fn checksum(&mut self) -> Checksum {
        let start = Instant::now();
        let sum = checksum(&self.list);
        self.stats.checksum_time += start.elapsed();
        sum
    }

    /// Frees all heap noise, if any is held.
    pub fn release_noise(&mut self) {
        if let Some(noise) = &mut self.noise {
            noise.release();
        }
    }

    /// The list under test.
    pub fn list(&self) -> &L {
        &self.list
    }

    /// Counters and timings so far.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Cached head handles that are currently set.
    pub fn cached_heads(&self) -> impl Iterator<Item = L::Handle> + '_ {
        self.heads.iter().flatten().copied()
    }

    /// Live heap-noise blocks.
    pub fn noise_blocks(&self) -> usize {
        self.noise.as_ref().map_or(0, HeapNoise::len)
    }

    fn insert_step(&mut self, rnd: u32) {
        let at = self.heads[rnd as usize % HEADS].unwrap_or_else(|| self.list.root());
        let value = self.next_value;

        let start = Instant::now();
        let node = self.list.alloc_node();
        self.stats.record_alloc(start.elapsed());
        // SAFETY: `at` is the root or a cached head, both linked; `node` is
        // fresh.
        unsafe { self.list.link_after(at, node, value) };

        if rnd % REPLACE_CHANCE == 0 {
            self.heads[value as usize % HEADS] = Some(node);
            self.stats.head_replacements += 1;
        }

        if rnd % PERTURB_CHANCE == 0 {
            if let Some(noise) = &mut self.noise {
                if noise.perturb() {
                    self.stats.perturbations += 1;
                } else {
                    noise.release();
                }
            }
        }

        self.next_value = self.next_value.wrapping_add(1);
    }

    fn delete_step(&mut self, rnd: u32) {
        if rnd % DELETE_CHANCE != 0 {
            return;
        }
        let Some(at) = self.heads[rnd as usize % HEADS] else {
            return;
        };
        // SAFETY: cached heads are linked (see the type docs).
        let Some(removed) = (unsafe { self.list.next(at) }) else {
            return;
        };
        // SAFETY: as above.
        let Some(value) = (unsafe { self.list.remove_after(at) }) else {
            return;
        };

        // `removed` now dangles; it is compared, never dereferenced.
        let slot = value as usize % HEADS;
        if self.heads[slot] == Some(removed) {
            self.heads[slot] = None;
        }
        self.stats.deallocs += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassicList, PoolList};

    fn config(iters: usize) -> BenchConfig {
        BenchConfig::new(iters, true, true, false)
    }

    #[test]
    fn inserts_grow_list_by_iters() {
        let mut w: Workload<PoolList> = Workload::new(&config(1_000)).unwrap();
        w.run_inserts();
        assert_eq!(w.list().len(), 1_001);
        assert_eq!(w.stats().allocs, 1_000);
        assert_eq!(w.stats().alloc_latency().len(), 1_000);
    }

    #[test]
    fn deallocs_match_removed_nodes() {
        let mut w: Workload<ClassicList> = Workload::new(&config(5_000)).unwrap();
        w.run_inserts();
        w.run_deletes();
        let stats = w.stats();
        assert!(stats.deallocs > 0);
        assert_eq!(w.list().len() as u64, 1 + stats.allocs - stats.deallocs);
    }

    #[test]
    fn cached_heads_stay_live_after_deletes() {
        let mut w: Workload<PoolList> = Workload::new(&config(20_000)).unwrap();
        w.run_inserts();
        w.run_deletes();

        let pool = w.list().pool();
        let reachable: std::collections::HashSet<u32> =
            pool.iter_from(w.list().root()).map(|(i, _)| i).collect();
        for head in w.cached_heads() {
            assert!(pool.is_occupied(head), "cached head {head} was freed");
            assert!(reachable.contains(&head), "cached head {head} unlinked");
        }
    }

    #[test]
    fn second_insert_phase_continues_values() {
        let mut w: Workload<PoolList> = Workload::new(&config(100)).unwrap();
        w.run_inserts();
        w.run_inserts();
        let mut values = Vec::new();
        w.list().for_each_value(|v| values.push(v));
        values.sort_unstable();
        assert_eq!(values, (0..=200).collect::<Vec<u32>>());
    }

    #[test]
    fn noise_only_when_enabled() {
        let mut quiet: Workload<PoolList> = Workload::new(&config(2_000)).unwrap();
        quiet.run_inserts();
        assert_eq!(quiet.noise_blocks(), 0);
        assert_eq!(quiet.stats().perturbations, 0);

        let noisy_config = BenchConfig::new(2_000, true, false, true);
        let mut noisy: Workload<PoolList> = Workload::new(&noisy_config).unwrap();
        noisy.run_inserts();
        assert!(noisy.stats().perturbations > 0);
        assert!(noisy.noise_blocks() > 0);

        noisy.release_noise();
        assert_eq!(noisy.noise_blocks(), 0);
    }
}
