//! Traversal digests used to cross-check variants.

use std::fmt;

use crate::Variant;

/// blake3 digest of a list's values in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum(blake3::Hash);

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.0.to_hex();
        f.write_str(&hex.as_str()[..16])
    }
}

/// Hashes every value reachable from the list's root, root included.
pub fn checksum<L: Variant>(list: &L) -> Checksum {
    let mut hasher = blake3::Hasher::new();
    list.for_each_value(|value| {
        hasher.update(&value.to_le_bytes());
    });
    Checksum(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassicList, PoolList};

    #[test]
    fn equal_contents_equal_digest() {
        let mut pool = PoolList::with_root(0);
        let mut classic = ClassicList::with_root(0);
        let (pool_root, classic_root) = (pool.root(), classic.root());
        for v in 1..=5 {
            // SAFETY: roots are always linked.
            unsafe {
                pool.insert_after(pool_root, v);
                classic.insert_after(classic_root, v);
            }
        }
        assert_eq!(checksum(&pool), checksum(&classic));
    }

    #[test]
    fn order_matters() {
        let mut a = PoolList::with_root(0);
        let mut b = PoolList::with_root(0);
        let (a_root, b_root) = (a.root(), b.root());
        // SAFETY: each handle is the root or the node just linked after it.
        unsafe {
            let tail = a.insert_after(a_root, 1);
            a.insert_after(tail, 2);
            let tail = b.insert_after(b_root, 2);
            b.insert_after(tail, 1);
        }

        assert_ne!(checksum(&a), checksum(&b));
    }

    #[test]
    fn display_is_short_hex() {
        let list = PoolList::with_root(0);
        let shown = checksum(&list).to_string();
        assert_eq!(shown.len(), 16);
        assert!(shown.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
