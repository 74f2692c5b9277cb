//! Optional heap perturbation between inserts.
//!
//! Small blocks are allocated alongside list nodes so that the boxed variant
//! does not get a pristine heap. Whether this actually fragments anything
//! depends on the allocator; only the hook is guaranteed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Maximum number of blocks held before the noise must be released.
pub const MAX_NOISE_BLOCKS: usize = 20_000;

/// Block sizes are `1 << class` for class in `0..SIZE_CLASSES` (1..=512 bytes).
const SIZE_CLASSES: u32 = 10;

/// A bag of small live heap blocks.
#[derive(Debug)]
pub struct HeapNoise {
    blocks: Vec<Box<[u8]>>,
    rng: StdRng,
}

impl HeapNoise {
    /// Creates an empty bag whose coin flips come from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            blocks: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Allocates up to one block per size class, each with probability 1/2.
    ///
    /// Returns `false` without allocating if the bag is already full.
    pub fn perturb(&mut self) -> bool {
        if self.blocks.len() >= MAX_NOISE_BLOCKS {
            return false;
        }
        for class in 0..SIZE_CLASSES {
            if self.blocks.len() >= MAX_NOISE_BLOCKS {
                break;
            }
            if self.rng.gen_bool(0.5) {
                let mut block = vec![0u8; 1 << class].into_boxed_slice();
                block[0] = 0xFF;
                self.blocks.push(block);
            }
        }
        true
    }

    /// Frees every block, newest first. Returns how many were freed.
    pub fn release(&mut self) -> usize {
        let freed = self.blocks.len();
        while self.blocks.pop().is_some() {}
        tracing::debug!(blocks = freed, "released heap noise");
        freed
    }

    /// Number of live blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if no blocks are live.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
