//! Pool-allocated storage for index-linked lists.
//!
//! This crate stores list nodes by value in one contiguous array and links
//! them with integer slot indices instead of pointers. A bitmap tracks which
//! slots are occupied.
//!
//! ```text
//! Box<Node> per node  - one heap allocation per insert, pointer chasing
//! SlotPool<Node>      - one growable array, index chasing, no per-node alloc
//! ```
//!
//! # Quick Start
//!
//! ```
//! use slotpool::{Index, ListPool};
//!
//! let mut pool: ListPool<i32> = ListPool::new();
//! let root = pool.push_root(0);
//!
//! let a = pool.insert_after(root, 1);
//! let b = pool.insert_after(a, 2);
//!
//! assert_eq!(pool.get(a).value, 1);
//! assert_eq!(pool.next(a), Some(b));
//!
//! // Index 0 is null: the end of every list.
//! assert!(pool.get(b).next.is_null());
//! ```
//!
//! # Null Sentinel
//!
//! Slot 0 is reserved and permanently marked occupied. It is never returned by
//! [`SlotPool::alloc`] and [`SlotPool::free`] ignores it, so `0` is free to
//! mean "no node" in every link.
//!
//! # Allocation
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `alloc` | O(1) amortized: scan from a hint, one word per 64 occupied slots |
//! | `free` | O(1) |
//! | `get` / `get_mut` | O(1), one array index |
//! | growth | O(capacity), doubling |
//!
//! Growth reallocates the record array, so references into the pool never
//! survive an `alloc`. Indices do.
//!
//! # Checked vs Unchecked
//!
//! The hot-path API (`get`, `get_mut`, `free`, `insert_after`, ...) trusts its
//! caller and only checks preconditions with `debug_assert!`. The `try_*`
//! methods return [`InvalidIndex`] for null, out-of-range or vacant indices.
//!
//! # Threading
//!
//! Single-threaded. A pool is `Send` when its records are, but sharing one
//! requires a single exclusive owner (e.g. a mutex around the whole pool).

#![warn(missing_docs)]

mod error;
mod index;
mod list;
mod pool;

pub use error::InvalidIndex;
pub use index::{Index, NULL_INDEX};
pub use list::{ListIter, ListNode, ListPool};
pub use pool::{INITIAL_CAPACITY, SlotPool};
