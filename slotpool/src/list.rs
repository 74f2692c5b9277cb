//! Singly-linked lists stored in a [`SlotPool`].
//!
//! Each node is a pool record holding a value and the index of the next node.
//! The list itself owns nothing: a list is just a root index, and links are
//! slot indices that only mean something inside their own pool.
//!
//! ```text
//! root ──► [ 5 | v ] ──► [ 2 | v ] ──► [ 9 | 0 ]
//!           slot 1        slot 5        slot 2      next = 0 (null)
//! ```
//!
//! Many lists can share one pool; each is identified by its own root.
//!
//! # Example
//!
//! ```
//! use slotpool::ListPool;
//!
//! let mut pool: ListPool<i32> = ListPool::new();
//! let root = pool.push_root(0);
//!
//! // Each insert goes directly after the root, so traversal is reversed.
//! for v in 1..=3 {
//!     pool.insert_after(root, v);
//! }
//! let values: Vec<i32> = pool.iter_from(root).map(|(_, v)| *v).collect();
//! assert_eq!(values, [0, 3, 2, 1]);
//!
//! // Splice out the node after the root.
//! let (removed, value) = pool.remove_after(root).unwrap();
//! assert_eq!(value, 3);
//! assert!(!pool.is_occupied(removed));
//! ```

use core::iter::FusedIterator;

use crate::{Index, SlotPool};

/// Pool storage for list nodes.
pub type ListPool<V, I = u32> = SlotPool<ListNode<V, I>, I>;

/// A list node: a value and the index of the next node (null at the tail).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNode<V, I: Index = u32> {
    /// Payload.
    pub value: V,
    /// Next node, or [`Index::NULL`] at the end of the list.
    pub next: I,
}

impl<V: Default, I: Index> Default for ListNode<V, I> {
    fn default() -> Self {
        Self {
            value: V::default(),
            next: I::NULL,
        }
    }
}

impl<V: Default, I: Index> SlotPool<ListNode<V, I>, I> {
    /// Allocates a standalone node (`next` = null) to serve as a list root.
    #[inline]
    pub fn push_root(&mut self, value: V) -> I {
        self.insert(ListNode {
            value,
            next: I::NULL,
        })
    }

    /// Inserts `value` directly after `at` and returns the new node's index.
    ///
    /// ```text
    /// at ──► at.next        becomes        at ──► new ──► at.next
    /// ```
    ///
    /// Precondition: `at` is a live node.
    #[inline]
    pub fn insert_after(&mut self, at: I, value: V) -> I {
        // Allocate first: growth moves records, so read `at` afterwards.
        let new = self.alloc();
        self.link_after(at, new, value);
        new
    }

    /// Removes the node after `at`, returning its index and value.
    ///
    /// Returns `None` without touching the pool if `at` is the tail.
    ///
    /// The removed index is free on return and the next allocation may reuse
    /// it. Anything that cached the index must drop it before allocating
    /// again.
    ///
    /// Precondition: `at` is a live node.
    #[inline]
    pub fn remove_after(&mut self, at: I) -> Option<(I, V)> {
        let removed = self.get(at).next;
        if removed.is_null() {
            return None;
        }

        let after = self.get(removed).next;
        self.get_mut(at).next = after;
        let node = self.remove(removed)?;
        Some((removed, node.value))
    }
}

impl<V, I: Index> SlotPool<ListNode<V, I>, I> {
    /// Stores `value` in `node` and links it directly after `at`.
    ///
    /// This is the splice half of [`insert_after`](Self::insert_after), for
    /// callers that allocate the slot themselves.
    ///
    /// Precondition: both are live, and `node` is not linked into any list.
    #[inline]
    pub fn link_after(&mut self, at: I, node: I, value: V) {
        debug_assert_ne!(node, at, "node linked after itself");
        let next = self.get(at).next;
        *self.get_mut(node) = ListNode { value, next };
        self.get_mut(at).next = node;
    }

    /// Index of the node after `at`, or `None` at the tail.
    ///
    /// Precondition: `at` is a live node.
    #[inline]
    pub fn next(&self, at: I) -> Option<I> {
        let next = self.get(at).next;
        next.is_some().then_some(next)
    }

    /// Iterates `(index, &value)` from `root` until the null link.
    ///
    /// The iterator is lazy and borrows the pool; call again to restart.
    /// A cycle makes it infinite.
    #[inline]
    pub fn iter_from(&self, root: I) -> ListIter<'_, V, I> {
        ListIter {
            pool: self,
            cursor: root,
        }
    }
}

/// Iterator over a list's nodes, created by [`SlotPool::iter_from`].
#[derive(Debug)]
pub struct ListIter<'a, V, I: Index = u32> {
    pool: &'a ListPool<V, I>,
    cursor: I,
}

impl<V, I: Index> Clone for ListIter<'_, V, I> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool,
            cursor: self.cursor,
        }
    }
}

impl<'a, V, I: Index> Iterator for ListIter<'a, V, I> {
    type Item = (I, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_null() {
            return None;
        }
        let index = self.cursor;
        let node = self.pool.get(index);
        self.cursor = node.next;
        Some((index, &node.value))
    }
}

impl<V, I: Index> FusedIterator for ListIter<'_, V, I> {}
