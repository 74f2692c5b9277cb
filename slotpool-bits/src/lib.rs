//! Growable bitset for slot occupancy tracking.
//!
//! `slotpool-bits` packs bits into unsigned words and answers "where is the
//! next 0 (or 1) at or after `start`?" by skipping whole words that cannot
//! contain a match. That query is what makes a bitmap usable as a free list.
//!
//! # Example
//!
//! ```
//! use slotpool_bits::Bitset;
//!
//! let mut bits: Bitset = Bitset::with_len(100);
//! bits.set(0, true);
//! bits.set(1, true);
//!
//! assert_eq!(bits.find_zero(0), Some(2));
//! assert_eq!(bits.find_one(1), Some(1));
//! assert_eq!(bits.find_one(2), None);
//!
//! // Growing keeps existing bits and zero-fills the new tail.
//! bits.resize(1000);
//! assert!(bits.get(1));
//! assert!(!bits.get(999));
//! ```
//!
//! # Word Layout
//!
//! Bit `i` lives in word `i / W::BITS` at offset `i % W::BITS`, least
//! significant bit first. Bits past `len()` in the last word ("padding") are
//! always zero, so a word compared against all-ones tells whether it holds any
//! zero bit without masking.
//!
//! ```text
//! len = 70, W = u64
//!
//! word 0: [ bits 0..64  ]
//! word 1: [ bits 64..70 | padding (always 0) ]
//! ```

#![warn(missing_docs)]

mod bitset;
mod error;
mod word;

pub use bitset::{Bitset, Ones};
pub use error::OutOfBounds;
pub use word::Word;
