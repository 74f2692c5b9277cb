//! Per-variant counters, phase timings and allocation latency.

use std::fmt;
use std::time::Duration;

use hdrhistogram::Histogram;

use crate::BenchError;

/// Longest allocation the histogram tracks before saturating (1 s).
const MAX_TRACKED_NANOS: u64 = 1_000_000_000;

/// Counters and timings for one variant.
#[derive(Debug, Clone)]
pub struct Stats {
    /// Nodes allocated.
    pub allocs: u64,
    /// Nodes actually removed.
    pub deallocs: u64,
    /// Times a heads-cache entry was overwritten by a new node.
    pub head_replacements: u64,
    /// Successful heap perturbations.
    pub perturbations: u64,
    /// Wall time spent in insert phases.
    pub insert_time: Duration,
    /// Wall time spent in delete phases.
    pub delete_time: Duration,
    /// Wall time spent computing checksums.
    pub checksum_time: Duration,
    /// Time spent inside node allocation alone.
    pub alloc_time: Duration,
    alloc_latency: Histogram<u64>,
}

impl Stats {
    /// Creates zeroed stats.
    pub fn new() -> Result<Self, BenchError> {
        Ok(Self {
            allocs: 0,
            deallocs: 0,
            head_replacements: 0,
            perturbations: 0,
            insert_time: Duration::ZERO,
            delete_time: Duration::ZERO,
            checksum_time: Duration::ZERO,
            alloc_time: Duration::ZERO,
            alloc_latency: Histogram::new_with_bounds(1, MAX_TRACKED_NANOS, 3)?,
        })
    }

    /// Counts one allocation that took `elapsed`.
    #[inline]
    pub fn record_alloc(&mut self, elapsed: Duration) {
        self.allocs += 1;
        self.alloc_time += elapsed;
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.alloc_latency.saturating_record(nanos.max(1));
    }

    /// Sum of the phase timings.
    pub fn total_time(&self) -> Duration {
        self.insert_time + self.delete_time + self.checksum_time
    }

    /// Allocation latency distribution in nanoseconds.
    pub fn alloc_latency(&self) -> &Histogram<u64> {
        &self.alloc_latency
    }

    /// Printable report labelled `name`.
    pub fn report<'a>(&'a self, name: &'a str) -> Report<'a> {
        Report { name, stats: self }
    }
}

/// Human-readable stats block, created by [`Stats::report`].
#[derive(Debug)]
pub struct Report<'a> {
    name: &'a str,
    stats: &'a Stats,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        let hist = &s.alloc_latency;
        writeln!(f, "stats for {}:", self.name)?;
        writeln!(f, "  allocs:            {:>12}", s.allocs)?;
        writeln!(f, "  deallocs:          {:>12}", s.deallocs)?;
        writeln!(f, "  head replacements: {:>12}", s.head_replacements)?;
        writeln!(f, "  perturbations:     {:>12}", s.perturbations)?;
        writeln!(f, "  total time:        {:>12.3?}", s.total_time())?;
        writeln!(f, "  insert time:       {:>12.3?}", s.insert_time)?;
        writeln!(f, "  checksum time:     {:>12.3?}", s.checksum_time)?;
        writeln!(f, "  delete time:       {:>12.3?}", s.delete_time)?;
        writeln!(f, "  alloc time:        {:>12.3?}", s.alloc_time)?;
        if hist.is_empty() {
            return writeln!(f, "  alloc latency:     no samples");
        }
        writeln!(f, "  alloc p50:         {:>9} ns", hist.value_at_quantile(0.50))?;
        writeln!(f, "  alloc p99:         {:>9} ns", hist.value_at_quantile(0.99))?;
        write!(f, "  alloc max:         {:>9} ns", hist.max())
    }
}
