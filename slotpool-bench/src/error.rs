use thiserror::Error;

use crate::Checksum;

/// Errors from setting up or running the workload.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The two variants disagreed on list contents.
    #[error("checksum {checkpoint} mismatch: pool {pool}, classic {classic}")]
    ChecksumMismatch {
        /// Checkpoint number (1-based).
        checkpoint: usize,
        /// Digest of the pool-allocated list.
        pool: Checksum,
        /// Digest of the boxed list.
        classic: Checksum,
    },

    /// The latency histogram rejected its bounds.
    #[error("latency histogram: {0}")]
    Histogram(#[from] hdrhistogram::CreationError),
}
