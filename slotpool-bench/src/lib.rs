//! Randomized list workload comparing a pool-allocated list against boxed
//! nodes.
//!
//! Each enabled [`Variant`] runs the same seeded script:
//!
//! ```text
//! inserts ─► checksum 1 ─► deletes ─► checksum 2 ─► inserts ─► checksum 3
//! ```
//!
//! Inserts land after a node picked from a small cache of "heads"; deletes
//! splice out the successor of a cached head. When both variants run, their
//! traversal digests must agree at every checkpoint.
//!
//! ```
//! use slotpool_bench::{BenchConfig, Driver};
//!
//! let config = BenchConfig::new(2_000, true, true, false);
//! let outcome = Driver::new(&config).unwrap().run().unwrap();
//! assert_eq!(outcome.checksums.len(), 3);
//! ```

#![warn(missing_docs)]

mod checksum;
mod classic;
mod config;
mod driver;
mod error;
mod noise;
mod stats;
mod variant;
mod workload;

pub use checksum::{Checksum, checksum};
pub use classic::{ClassicList, ClassicNode};
pub use config::{BenchConfig, DEFAULT_ITERS, NOISE_SEED};
pub use driver::{Driver, Outcome};
pub use error::BenchError;
pub use noise::{HeapNoise, MAX_NOISE_BLOCKS};
pub use stats::{Report, Stats};
pub use variant::{PoolList, Variant};
pub use workload::{
    DELETE_CHANCE, DELETE_SEED, HEADS, INSERT_SEED, PERTURB_CHANCE, REPLACE_CHANCE, Workload,
};
