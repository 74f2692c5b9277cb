//! Growable bitset with word-skipping search.

use crate::{OutOfBounds, Word};

/// A growable bit vector packed into words of type `W`.
///
/// # Invariants
///
/// - `words.len() == len.div_ceil(W::BITS)`; a zero-length bitset owns no words.
/// - Padding bits (positions `>= len` in the last word) are always zero.
///
/// # Preconditions
///
/// [`get`](Self::get) and [`set`](Self::set) require `index < len()`. This is
/// checked with `debug_assert!` only; use [`try_get`](Self::try_get) /
/// [`try_set`](Self::try_set) when the index is untrusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitset<W: Word = u64> {
    words: Vec<W>,
    len: usize,
}

impl<W: Word> Default for Bitset<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> Bitset<W> {
    /// Creates an empty bitset. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates a bitset of `len` bits, all zero.
    ///
    /// `len == 0` is legal and allocates nothing.
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![W::ZERO; words_for::<W>(len)],
            len,
        }
    }

    /// Logical length in bits.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bitset has zero length.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing words, least significant bit first.
    #[inline]
    pub fn as_words(&self) -> &[W] {
        &self.words
    }

    /// Changes the logical length to `new_len`.
    ///
    /// - `new_len == 0` releases the word storage entirely.
    /// - An empty bitset is initialized as if by [`with_len`](Self::with_len).
    /// - Otherwise existing bits below `min(len, new_len)` are kept and every
    ///   bit in `[len, new_len)` reads as zero afterwards.
    pub fn resize(&mut self, new_len: usize) {
        if new_len == 0 {
            self.words = Vec::new();
            self.len = 0;
            return;
        }
        if self.len == 0 {
            *self = Self::with_len(new_len);
            return;
        }

        // Stray writes past `len` must not surface as data once those
        // positions become addressable.
        self.clear_padding();
        self.words.resize(words_for::<W>(new_len), W::ZERO);
        self.len = new_len;
        self.clear_padding();
    }

    /// Clears every bit, keeping the length.
    pub fn clear(&mut self) {
        self.words.fill(W::ZERO);
    }

    /// Returns the bit at `index`.
    ///
    /// Precondition: `index < len()`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "bit index {index} out of bounds for length {}",
            self.len
        );
        let (word, bit) = split::<W>(index);
        self.words[word].bit(bit)
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// Precondition: `index < len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        debug_assert!(
            index < self.len,
            "bit index {index} out of bounds for length {}",
            self.len
        );
        let (word, bit) = split::<W>(index);
        self.words[word] = self.words[word].with_bit(bit, value);
    }

    /// Returns the bit at `index`, or an error if `index >= len()`.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<bool, OutOfBounds> {
        self.check(index)?;
        Ok(self.get(index))
    }

    /// Sets the bit at `index`, or returns an error if `index >= len()`.
    #[inline]
    pub fn try_set(&mut self, index: usize, value: bool) -> Result<(), OutOfBounds> {
        self.check(index)?;
        self.set(index, value);
        Ok(())
    }

    /// Returns the lowest index `>= start` whose bit equals `target`.
    ///
    /// Returns `None` if there is no such bit before `len()`, including when
    /// `start >= len()`.
    ///
    /// Words uniformly equal to `!target` are skipped with one comparison
    /// each, so a scan over a long occupied run costs
    /// `O(run / W::BITS)`.
    pub fn find(&self, target: bool, start: usize) -> Option<usize> {
        if start >= self.len {
            return None;
        }

        let (mut word, offset) = split::<W>(start);

        // Partial first word: ignore the bits below `start`.
        if offset != 0 {
            let hits = self.words[word]
                .matches(target)
                .and(W::low_mask(offset).not());
            if hits != W::ZERO {
                return self.within_len(word, hits.trailing_zeros_usize());
            }
            word += 1;
        }

        let skip = W::uniform_without(target);
        self.words[word..]
            .iter()
            .position(|&w| w != skip)
            .and_then(|pos| {
                let word = word + pos;
                let bit = self.words[word].matches(target).trailing_zeros_usize();
                self.within_len(word, bit)
            })
    }

    /// Lowest zero bit at or after `start`.
    #[inline]
    pub fn find_zero(&self, start: usize) -> Option<usize> {
        self.find(false, start)
    }

    /// Lowest set bit at or after `start`.
    #[inline]
    pub fn find_one(&self, start: usize) -> Option<usize> {
        self.find(true, start)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        // Padding is zero, so whole-word popcount is exact.
        self.words.iter().map(|w| w.count_ones_usize()).sum()
    }

    /// Iterates the indices of set bits in ascending order.
    pub fn iter_ones(&self) -> Ones<'_, W> {
        Ones { bits: self, next: 0 }
    }

    #[inline]
    fn check(&self, index: usize) -> Result<(), OutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(OutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// A zero bit found in the padding means "not found".
    #[inline]
    fn within_len(&self, word: usize, bit: usize) -> Option<usize> {
        let index = word * W::BITS + bit;
        (index < self.len).then_some(index)
    }

    fn clear_padding(&mut self) {
        let tail = self.len % W::BITS;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last = last.and(W::low_mask(tail));
            }
        }
    }
}

/// Iterator over set bit indices, created by [`Bitset::iter_ones`].
#[derive(Debug, Clone)]
pub struct Ones<'a, W: Word> {
    bits: &'a Bitset<W>,
    next: usize,
}

impl<W: Word> Iterator for Ones<'_, W> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let found = self.bits.find_one(self.next)?;
        self.next = found + 1;
        Some(found)
    }
}

#[inline]
const fn words_for<W: Word>(len: usize) -> usize {
    len.div_ceil(W::BITS)
}

#[inline]
const fn split<W: Word>(index: usize) -> (usize, usize) {
    (index / W::BITS, index % W::BITS)
}
