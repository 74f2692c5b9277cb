/// Iterations per insert and delete phase when none is given.
pub const DEFAULT_ITERS: usize = 500_000;

/// Seed for the heap-noise coin flips. Independent of the workload seeds,
/// so perturbation never changes list contents.
pub const NOISE_SEED: u64 = 0x5EED_F00D;

/// Run settings, built once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Iterations per insert and delete phase.
    pub iters: usize,
    /// Run the pool-allocated list.
    pub pool: bool,
    /// Run the boxed list.
    pub classic: bool,
    /// Interleave small heap allocations with inserts.
    pub perturb_heap: bool,
}

impl BenchConfig {
    /// Builds a config. Selecting neither variant selects both.
    pub fn new(iters: usize, pool: bool, classic: bool, perturb_heap: bool) -> Self {
        let both = !pool && !classic;
        Self {
            iters,
            pool: pool || both,
            classic: classic || both,
            perturb_heap,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ITERS, false, false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neither_variant_means_both() {
        let config = BenchConfig::new(10, false, false, true);
        assert!(config.pool && config.classic);
        assert!(config.perturb_heap);
    }

    #[test]
    fn single_variant_kept() {
        let config = BenchConfig::new(10, true, false, false);
        assert!(config.pool);
        assert!(!config.classic);
    }

    #[test]
    fn default_runs_everything() {
        let config = BenchConfig::default();
        assert_eq!(config.iters, DEFAULT_ITERS);
        assert!(config.pool && config.classic && !config.perturb_heap);
    }
}
