//! Errors returned by the checked pool API.

use thiserror::Error;

/// An index that does not name a live record.
///
/// Only the `try_*` methods return this. The unchecked methods treat the same
/// conditions as caller bugs (`debug_assert!` in debug builds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidIndex {
    /// Index 0 is the null sentinel and never holds a record.
    #[error("index 0 is the null sentinel")]
    Null,
    /// Index is past the end of the pool.
    #[error("index {index} out of range for capacity {capacity}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Pool capacity at the time of the request.
        capacity: usize,
    },
    /// Index is in range but the slot is free.
    #[error("slot {index} is not occupied")]
    Vacant {
        /// The requested index.
        index: usize,
    },
}
