//! Slot index types.
//!
//! A slot index is a plain unsigned integer offset into the pool's record
//! array. Zero is reserved as the null sentinel, so "no node" costs no extra
//! space over the index itself (no `Option<I>` tag).

use core::fmt;

/// Reserved index meaning "no node" / "end of list".
pub const NULL_INDEX: u32 = 0;

/// An unsigned integer usable as a slot index.
///
/// # Example
///
/// ```
/// use slotpool::Index;
///
/// assert!(u32::NULL.is_null());
/// assert!(7u32.is_some());
/// assert_eq!(u16::try_from_usize(70_000), None);
/// ```
pub trait Index: Copy + Eq + fmt::Debug {
    /// The null sentinel. Always `0`.
    const NULL: Self;

    /// Converts from `usize` on the hot path.
    ///
    /// Precondition: `val` fits in `Self`.
    fn from_usize(val: usize) -> Self;

    /// Converts from `usize`, returning `None` if `val` does not fit.
    fn try_from_usize(val: usize) -> Option<Self>;

    /// Returns the index as a `usize` offset.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the null sentinel.
    #[inline]
    fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Returns `true` if this is not the null sentinel.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_null()
    }
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NULL: Self = 0;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    debug_assert!(<$ty>::try_from(val).is_ok(), "index {val} overflows {}", stringify!($ty));
                    val as Self
                }

                #[inline]
                fn try_from_usize(val: usize) -> Option<Self> {
                    <$ty>::try_from(val).ok()
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u16, u32, u64, usize);
