//! Runs the enabled variants phase by phase and cross-checks them.

use tracing::info;

use crate::{BenchConfig, BenchError, Checksum, ClassicList, PoolList, Stats, Variant, Workload};

/// Number of checksum checkpoints in a run.
const CHECKPOINTS: usize = 3;

/// Owns one workload per enabled variant.
#[derive(Debug)]
pub struct Driver {
    pool: Option<Workload<PoolList>>,
    classic: Option<Workload<ClassicList>>,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct Outcome {
    /// Agreed digest at each checkpoint.
    pub checksums: Vec<Checksum>,
    /// Pool variant stats, if it ran.
    pub pool: Option<Stats>,
    /// Boxed variant stats, if it ran.
    pub classic: Option<Stats>,
}

impl Outcome {
    /// `(name, stats)` for every variant that ran.
    pub fn variants(&self) -> impl Iterator<Item = (&'static str, &Stats)> {
        let pool = self.pool.as_ref().map(|s| (PoolList::NAME, s));
        let classic = self.classic.as_ref().map(|s| (ClassicList::NAME, s));
        pool.into_iter().chain(classic)
    }
}

impl Driver {
    /// Sets up the variants selected by `config`.
    pub fn new(config: &BenchConfig) -> Result<Self, BenchError> {
        let pool = config.pool.then(|| Workload::new(config)).transpose()?;
        let classic = config.classic.then(|| Workload::new(config)).transpose()?;
        Ok(Self { pool, classic })
    }

    /// Runs every phase, failing at the first checkpoint where the variants
    /// disagree.
    pub fn run(mut self) -> Result<Outcome, BenchError> {
        let mut checksums = Vec::with_capacity(CHECKPOINTS);

        info!("insert phase");
        self.each(Workload::run_inserts, Workload::run_inserts);
        checksums.extend(self.checkpoint(1)?);

        self.each(Workload::release_noise, Workload::release_noise);

        info!("delete phase");
        self.each(Workload::run_deletes, Workload::run_deletes);
        checksums.extend(self.checkpoint(2)?);

        info!("insert phase");
        self.each(Workload::run_inserts, Workload::run_inserts);
        checksums.extend(self.checkpoint(3)?);

        self.each(Workload::release_noise, Workload::release_noise);

        Ok(Outcome {
            checksums,
            pool: self.pool.map(|w| w.stats().clone()),
            classic: self.classic.map(|w| w.stats().clone()),
        })
    }

    fn each(
        &mut self,
        pool: impl FnOnce(&mut Workload<PoolList>),
        classic: impl FnOnce(&mut Workload<ClassicList>),
    ) {
        if let Some(w) = &mut self.pool {
            pool(w);
        }
        if let Some(w) = &mut self.classic {
            classic(w);
        }
    }

    fn checkpoint(&mut self, checkpoint: usize) -> Result<Option<Checksum>, BenchError> {
        let pool = self.pool.as_mut().map(Workload::checksum);
        let classic = self.classic.as_mut().map(Workload::checksum);

        if let Some(sum) = pool {
            info!(checkpoint, variant = PoolList::NAME, %sum, "checksum");
        }
        if let Some(sum) = classic {
            info!(checkpoint, variant = ClassicList::NAME, %sum, "checksum");
        }

        match (pool, classic) {
            (Some(pool), Some(classic)) if pool != classic => Err(BenchError::ChecksumMismatch {
                checkpoint,
                pool,
                classic,
            }),
            (Some(sum), _) | (None, Some(sum)) => Ok(Some(sum)),
            (None, None) => Ok(None),
        }
    }
}
