//! Linked list with one heap allocation per node.

use std::ptr::NonNull;

use crate::Variant;

/// A boxed list node.
#[derive(Debug)]
pub struct ClassicNode {
    value: u32,
    next: Option<NonNull<ClassicNode>>,
}

/// Singly-linked list of individually boxed nodes.
///
/// Handles are raw node pointers so the workload can cache them. The
/// [`Variant`] methods that take a handle are `unsafe`: the pointer is
/// dereferenced, and only the caller knows it is still linked. The list
/// frees every reachable node on drop.
#[derive(Debug)]
pub struct ClassicList {
    root: NonNull<ClassicNode>,
    len: usize,
}

impl ClassicList {
    /// # Safety
    ///
    /// `ptr` must be linked into this list, or freshly allocated by it.
    unsafe fn node(&self, ptr: NonNull<ClassicNode>) -> &ClassicNode {
        // SAFETY: the node is live and owned by `self` per the caller.
        unsafe { ptr.as_ref() }
    }

    /// # Safety
    ///
    /// As for [`node`](Self::node).
    unsafe fn node_mut(&mut self, mut ptr: NonNull<ClassicNode>) -> &mut ClassicNode {
        // SAFETY: as in `node`; `&mut self` rules out other borrows.
        unsafe { ptr.as_mut() }
    }
}

fn boxed(value: u32) -> NonNull<ClassicNode> {
    NonNull::from(Box::leak(Box::new(ClassicNode { value, next: None })))
}

impl Variant for ClassicList {
    type Handle = NonNull<ClassicNode>;

    const NAME: &'static str = "classic linked list";

    fn with_root(value: u32) -> Self {
        Self {
            root: boxed(value),
            len: 1,
        }
    }

    #[inline]
    fn root(&self) -> Self::Handle {
        self.root
    }

    #[inline]
    fn alloc_node(&mut self) -> Self::Handle {
        boxed(0)
    }

    #[inline]
    unsafe fn link_after(&mut self, at: Self::Handle, node: Self::Handle, value: u32) {
        // SAFETY: `at` is linked and `node` is fresh, per the caller.
        unsafe {
            let next = self.node(at).next;
            let new = self.node_mut(node);
            new.value = value;
            new.next = next;
            self.node_mut(at).next = Some(node);
        }
        self.len += 1;
    }

    #[inline]
    unsafe fn next(&self, at: Self::Handle) -> Option<Self::Handle> {
        // SAFETY: `at` is linked, per the caller.
        unsafe { self.node(at).next }
    }

    unsafe fn remove_after(&mut self, at: Self::Handle) -> Option<u32> {
        // SAFETY: `at` is linked, per the caller.
        let removed = unsafe { self.node(at).next }?;
        // SAFETY: `removed` was linked, so it came from `boxed` and is owned
        // by this list. Unlinking below drops the only reference to it.
        let node = unsafe { Box::from_raw(removed.as_ptr()) };
        // SAFETY: `at` is still linked.
        unsafe { self.node_mut(at).next = node.next };
        self.len -= 1;
        Some(node.value)
    }

    fn for_each_value(&self, mut f: impl FnMut(u32)) {
        let mut cursor = Some(self.root);
        while let Some(ptr) = cursor {
            // SAFETY: the walk only visits nodes reachable from the root.
            let node = unsafe { self.node(ptr) };
            f(node.value);
            cursor = node.next;
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl Drop for ClassicList {
    fn drop(&mut self) {
        let mut cursor = Some(self.root);
        while let Some(ptr) = cursor {
            // SAFETY: each reachable node is freed exactly once, walking
            // forward before the box drops.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            cursor = node.next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &ClassicList) -> Vec<u32> {
        let mut out = Vec::new();
        list.for_each_value(|v| out.push(v));
        out
    }

    #[test]
    fn insert_after_root_reverses() {
        let mut list = ClassicList::with_root(0);
        let root = list.root();
        for v in 1..=3 {
            // SAFETY: root is always linked.
            unsafe { list.insert_after(root, v) };
        }
        assert_eq!(values(&list), [0, 3, 2, 1]);
        assert_eq!(list.len(), 4);
        assert!(!list.is_empty());
    }

    #[test]
    fn remove_after_splices() {
        let mut list = ClassicList::with_root(0);
        let root = list.root();
        // SAFETY: each handle is linked when used; `b` is not touched after
        // it is removed.
        unsafe {
            let a = list.insert_after(root, 1);
            let b = list.insert_after(a, 2);
            let c = list.insert_after(b, 3);

            assert_eq!(list.next(a), Some(b));
            assert_eq!(list.remove_after(a), Some(2));
            assert_eq!(list.next(a), Some(c));
        }
        assert_eq!(values(&list), [0, 1, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_after_tail_is_noop() {
        let mut list = ClassicList::with_root(0);
        let root = list.root();
        // SAFETY: `a` stays linked.
        unsafe {
            let a = list.insert_after(root, 1);
            assert_eq!(list.next(a), None);
            assert_eq!(list.remove_after(a), None);
        }
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let mut list = ClassicList::with_root(0);
        let mut tail = list.root();
        for v in 0..200_000 {
            // SAFETY: `tail` is the last linked node.
            tail = unsafe { list.insert_after(tail, v) };
        }
        drop(list);
    }
}
