//! Storage words for [`Bitset`](crate::Bitset).

use core::fmt;

/// An unsigned integer used as a bitset storage word.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`. Wider words skip
/// more bits per comparison; narrow words are handy in tests because word
/// boundaries show up after a handful of bits.
///
/// # Example
///
/// ```
/// use slotpool_bits::Word;
///
/// let w: u8 = 0b0000_0101;
/// assert!(w.bit(2));
/// assert_eq!(w.with_bit(1, true), 0b0000_0111);
/// assert_eq!(<u8 as Word>::low_mask(3), 0b0000_0111);
/// assert_eq!(w.matches(false).trailing_zeros_usize(), 1);
/// ```
pub trait Word: Copy + Eq + fmt::Debug {
    /// Number of bits in the word.
    const BITS: usize;

    /// All bits clear.
    const ZERO: Self;

    /// All bits set.
    const ONES: Self;

    /// Returns the bit at `bit` (`bit < BITS`).
    fn bit(self, bit: usize) -> bool;

    /// Returns a copy with `bit` set to `value` (`bit < BITS`).
    fn with_bit(self, bit: usize, value: bool) -> Self;

    /// Mask with the low `bits` bits set (`bits < BITS`).
    fn low_mask(bits: usize) -> Self;

    /// Bitwise AND.
    fn and(self, other: Self) -> Self;

    /// Bitwise NOT.
    fn not(self) -> Self;

    /// Index of the least significant set bit; `BITS` if the word is zero.
    fn trailing_zeros_usize(self) -> usize;

    /// Number of set bits.
    fn count_ones_usize(self) -> usize;

    /// Returns a word whose set bits mark the positions equal to `target`.
    #[inline]
    fn matches(self, target: bool) -> Self {
        if target { self } else { self.not() }
    }

    /// The uniform word containing no bit equal to `target`.
    #[inline]
    fn uniform_without(target: bool) -> Self {
        if target { Self::ZERO } else { Self::ONES }
    }
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const ONES: Self = <$ty>::MAX;

                #[inline]
                fn bit(self, bit: usize) -> bool {
                    (self >> bit) & 1 == 1
                }

                #[inline]
                fn with_bit(self, bit: usize, value: bool) -> Self {
                    let mask: $ty = 1 << bit;
                    if value { self | mask } else { self & !mask }
                }

                #[inline]
                fn low_mask(bits: usize) -> Self {
                    debug_assert!(bits < <Self as Word>::BITS, "mask width exceeds word");
                    ((1 as $ty) << bits) - 1
                }

                #[inline]
                fn and(self, other: Self) -> Self {
                    self & other
                }

                #[inline]
                fn not(self) -> Self {
                    !self
                }

                #[inline]
                fn trailing_zeros_usize(self) -> usize {
                    self.trailing_zeros() as usize
                }

                #[inline]
                fn count_ones_usize(self) -> usize {
                    self.count_ones() as usize
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_word_basics {
        ($($ty:ty => $name:ident),*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(<$ty as Word>::BITS, <$ty>::BITS as usize);
                    assert_eq!(<$ty as Word>::low_mask(0), 0);
                    assert_eq!(<$ty as Word>::low_mask(1), 1);
                    assert_eq!(<$ty as Word>::low_mask(<$ty as Word>::BITS - 1), <$ty>::MAX >> 1);

                    let top = <$ty as Word>::BITS - 1;
                    let w = <$ty as Word>::ZERO.with_bit(top, true);
                    assert!(w.bit(top));
                    assert_eq!(w.trailing_zeros_usize(), top);
                    assert_eq!(w.with_bit(top, false), 0);
                    assert_eq!(<$ty as Word>::ZERO.trailing_zeros_usize(), <$ty as Word>::BITS);
                }
            )*
        };
    }

    test_word_basics!(
        u8 => u8_basics,
        u16 => u16_basics,
        u32 => u32_basics,
        u64 => u64_basics,
        u128 => u128_basics
    );

    #[test]
    fn matches_inverts_for_zero_target() {
        let w: u8 = 0b1111_0111;
        assert_eq!(w.matches(true), w);
        assert_eq!(w.matches(false), 0b0000_1000);
        assert_eq!(w.matches(false).trailing_zeros_usize(), 3);
    }

    #[test]
    fn uniform_words() {
        assert_eq!(<u32 as Word>::uniform_without(false), u32::MAX);
        assert_eq!(<u32 as Word>::uniform_without(true), 0);
    }

    #[test]
    fn low_mask_just_below_width() {
        assert_eq!(<u8 as Word>::low_mask(7), 0x7F);
        assert_eq!(<u128 as Word>::low_mask(127), u128::MAX >> 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "mask width exceeds word")]
    fn low_mask_full_width_panics_in_debug() {
        let _ = <u32 as Word>::low_mask(32);
    }
}
