//! Error types for checked bit access.

use thiserror::Error;

/// Bit index at or past the logical length of the bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit index {index} out of bounds for length {len}")]
pub struct OutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// Logical length of the bitset at the time of the request.
    pub len: usize,
}
