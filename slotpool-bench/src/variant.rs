//! The list operations the workload drives, and the pool-backed variant.

use std::fmt;

use slotpool::ListPool;

/// A singly-linked list of `u32` values with a permanent root node.
///
/// Handles are what the workload caches between operations: slot indices for
/// the pool, node pointers for the boxed list. A handle is *linked* while its
/// node is reachable from this list's root; the root is always linked.
/// Operations that take a handle are `unsafe` because the boxed list
/// dereferences it.
///
/// ```compile_fail
/// use slotpool_bench::{ClassicList, Variant};
///
/// let mut list = ClassicList::with_root(0);
/// let root = list.root();
/// list.remove_after(root);
/// ```
pub trait Variant {
    /// Names a node.
    type Handle: Copy + Eq + fmt::Debug;

    /// Label used in logs and reports.
    const NAME: &'static str;

    /// Creates a list holding only a root with `value`.
    fn with_root(value: u32) -> Self;

    /// The root node.
    fn root(&self) -> Self::Handle;

    /// Allocates an unlinked node.
    fn alloc_node(&mut self) -> Self::Handle;

    /// Links `node` directly after `at`, storing `value` in it.
    ///
    /// # Safety
    ///
    /// `at` must be linked into this list. `node` must come from this list's
    /// [`alloc_node`](Self::alloc_node) and must not be linked yet.
    unsafe fn link_after(&mut self, at: Self::Handle, node: Self::Handle, value: u32);

    /// The node after `at`, or `None` at the tail.
    ///
    /// # Safety
    ///
    /// `at` must be linked into this list.
    unsafe fn next(&self, at: Self::Handle) -> Option<Self::Handle>;

    /// Unlinks and frees the node after `at`, returning its value. `None` at
    /// the tail.
    ///
    /// Any handle to the removed node is dangling afterwards.
    ///
    /// # Safety
    ///
    /// `at` must be linked into this list.
    unsafe fn remove_after(&mut self, at: Self::Handle) -> Option<u32>;

    /// Calls `f` with each value from the root to the tail.
    fn for_each_value(&self, f: impl FnMut(u32));

    /// Number of nodes, root included.
    fn len(&self) -> usize;

    /// Always `false` for a constructed list: the root is permanent.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocates and links in one step.
    ///
    /// # Safety
    ///
    /// `at` must be linked into this list.
    #[inline]
    unsafe fn insert_after(&mut self, at: Self::Handle, value: u32) -> Self::Handle {
        let node = self.alloc_node();
        // SAFETY: `at` is linked per the caller; `node` is fresh.
        unsafe { self.link_after(at, node, value) };
        node
    }
}

/// List whose nodes live in a [`ListPool`].
#[derive(Debug)]
pub struct PoolList {
    pool: ListPool<u32>,
    root: u32,
}

impl PoolList {
    /// Backing pool.
    pub fn pool(&self) -> &ListPool<u32> {
        &self.pool
    }
}

impl Variant for PoolList {
    type Handle = u32;

    const NAME: &'static str = "pool allocated linked list";

    fn with_root(value: u32) -> Self {
        let mut pool = ListPool::new();
        let root = pool.push_root(value);
        Self { pool, root }
    }

    #[inline]
    fn root(&self) -> u32 {
        self.root
    }

    #[inline]
    fn alloc_node(&mut self) -> u32 {
        self.pool.alloc()
    }

    #[inline]
    unsafe fn link_after(&mut self, at: u32, node: u32, value: u32) {
        self.pool.link_after(at, node, value);
    }

    #[inline]
    unsafe fn next(&self, at: u32) -> Option<u32> {
        self.pool.next(at)
    }

    #[inline]
    unsafe fn remove_after(&mut self, at: u32) -> Option<u32> {
        self.pool.remove_after(at).map(|(_, value)| value)
    }

    fn for_each_value(&self, mut f: impl FnMut(u32)) {
        for (_, value) in self.pool.iter_from(self.root) {
            f(*value);
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<L: Variant>(list: &L) -> Vec<u32> {
        let mut out = Vec::new();
        list.for_each_value(|v| out.push(v));
        out
    }

    #[test]
    fn split_insert_matches_insert_after() {
        let mut list = PoolList::with_root(0);
        let root = list.root();
        let a = list.alloc_node();
        // SAFETY: root is linked, `a` is fresh.
        unsafe {
            list.link_after(root, a, 1);
            list.insert_after(root, 2);
        }
        assert_eq!(values(&list), [0, 2, 1]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn remove_after_reports_value_only() {
        let mut list = PoolList::with_root(0);
        let root = list.root();
        // SAFETY: only the root and its live successors are passed.
        unsafe {
            let a = list.insert_after(root, 7);
            assert_eq!(list.next(root), Some(a));
            assert_eq!(list.remove_after(root), Some(7));
            assert!(!list.pool().is_occupied(a));
            assert_eq!(list.next(root), None);
            assert_eq!(list.remove_after(root), None);
        }
    }
}
