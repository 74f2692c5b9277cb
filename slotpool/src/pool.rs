//! Bitmap-tracked slot pool.
//!
//! Records live in one contiguous `Vec<T>`. A [`Bitset`] with one bit per slot
//! marks which slots hold live records. Allocation scans the bitset for a zero
//! bit starting from a scan hint (`low_water`), so a run of occupied slots is
//! skipped a whole word at a time.
//!
//! # Scan hint
//!
//! ```text
//! slots:   0 1 2 3 4 5 6 7 8 ...
//! bits:    1 1 1 1 0 1 0 0 0
//!                  ^
//!                  low_water <= first free slot
//! ```
//!
//! - `alloc` sets `low_water` to the slot it just took.
//! - `free` lowers `low_water` to the freed slot if it is below the hint.
//!
//! The hint never moves past a free slot, so a scan from `low_water` finds the
//! lowest free slot.

use core::marker::PhantomData;
use core::mem;

use slotpool_bits::Bitset;

use crate::{Index, InvalidIndex};

/// Capacity of a freshly created pool.
pub const INITIAL_CAPACITY: usize = 16;

/// A growable pool of `T` records addressed by integer slot index.
///
/// Slot 0 is the null sentinel: permanently occupied, never returned by
/// [`alloc`](Self::alloc), never freed.
///
/// # Preconditions
///
/// The unchecked accessors ([`get`](Self::get), [`get_mut`](Self::get_mut),
/// [`free`](Self::free), [`remove`](Self::remove)) require a live, non-null
/// index. Violations trip a `debug_assert!`; in release builds an in-range
/// violation reads or clobbers whatever record is in that slot. Use the
/// `try_*` variants for untrusted indices.
///
/// # Example
///
/// ```
/// use slotpool::SlotPool;
///
/// let mut pool: SlotPool<u64> = SlotPool::new();
///
/// let a = pool.insert(10);
/// let b = pool.insert(20);
/// assert_eq!((a, b), (1, 2));
/// assert_eq!(*pool.get(b), 20);
///
/// pool.free(a);
/// // The lowest free slot is handed out next.
/// assert_eq!(pool.insert(30), a);
/// ```
#[derive(Debug)]
pub struct SlotPool<T, I: Index = u32> {
    records: Vec<T>,
    occupied: Bitset,
    /// Occupied slots, including the null sentinel.
    count: usize,
    /// Every slot below this index is occupied.
    low_water: usize,
    _marker: PhantomData<I>,
}

impl<T: Default, I: Index> Default for SlotPool<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, I: Index> SlotPool<T, I> {
    /// Creates a pool with [`INITIAL_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a pool with at least `min_capacity` slots (null included).
    ///
    /// Capacity is rounded up to a power of two, and is never below
    /// [`INITIAL_CAPACITY`].
    ///
    /// # Panics
    ///
    /// Panics if the capacity cannot be addressed by `I`.
    pub fn with_capacity(min_capacity: usize) -> Self {
        let capacity = min_capacity.max(INITIAL_CAPACITY).next_power_of_two();
        assert!(
            I::try_from_usize(capacity - 1).is_some(),
            "capacity exceeds index type maximum"
        );

        let mut records = Vec::with_capacity(capacity);
        records.resize_with(capacity, T::default);

        let mut occupied = Bitset::with_len(capacity);
        occupied.set(0, true);

        Self {
            records,
            occupied,
            count: 1,
            low_water: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a slot and returns its index. Never returns null.
    ///
    /// The slot holds `T::default()`. Doubles the capacity when every slot
    /// is occupied; any `&T` obtained earlier cannot outlive this call, only
    /// indices stay valid.
    ///
    /// # Panics
    ///
    /// Panics if growth would exceed the range of `I`.
    #[inline]
    pub fn alloc(&mut self) -> I {
        if self.count == self.capacity() {
            self.grow();
        }

        let index = match self.occupied.find_zero(self.low_water) {
            Some(index) => index,
            None => unreachable!("slot pool below capacity has no free slot"),
        };

        self.occupied.set(index, true);
        self.count += 1;
        self.low_water = index;
        I::from_usize(index)
    }

    /// Allocates a slot and writes `value` into it.
    #[inline]
    pub fn insert(&mut self, value: T) -> I {
        let index = self.alloc();
        self.records[index.as_usize()] = value;
        index
    }

    /// Frees `index`, dropping its record. Freeing null is a no-op.
    ///
    /// Precondition: `index` is null or occupied.
    #[inline]
    pub fn free(&mut self, index: I) {
        self.remove(index);
    }

    /// Frees `index` and returns its record. Returns `None` for null.
    ///
    /// Precondition: `index` is null or occupied.
    #[inline]
    pub fn remove(&mut self, index: I) -> Option<T> {
        if index.is_null() {
            return None;
        }

        let i = index.as_usize();
        debug_assert!(self.is_occupied(index), "freeing vacant slot {i}");

        // Out-of-range indices panic here, before any bookkeeping changes.
        let record = mem::take(&mut self.records[i]);
        self.count -= 1;
        self.occupied.set(i, false);
        self.low_water = self.low_water.min(i);
        Some(record)
    }

    /// Checked [`free`](Self::free).
    pub fn try_free(&mut self, index: I) -> Result<(), InvalidIndex> {
        self.try_remove(index).map(drop)
    }

    /// Checked [`remove`](Self::remove). Rejects null, out-of-range and
    /// vacant indices.
    pub fn try_remove(&mut self, index: I) -> Result<T, InvalidIndex> {
        self.validate(index)?;
        match self.remove(index) {
            Some(record) => Ok(record),
            None => Err(InvalidIndex::Null),
        }
    }

    /// Drops every record and returns the pool to its just-created state
    /// ([`INITIAL_CAPACITY`] slots, only null occupied).
    pub fn reset(&mut self) {
        let capacity = self.capacity();
        let live = self.len();
        *self = Self::new();
        tracing::debug!(capacity, live, "slot pool reset");
    }

    #[cold]
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = match old_capacity.checked_mul(2) {
            Some(cap) if I::try_from_usize(cap - 1).is_some() => cap,
            _ => panic!("slot pool exhausted index space at capacity {old_capacity}"),
        };

        self.records.resize_with(new_capacity, T::default);
        self.occupied.resize(new_capacity);

        tracing::debug!(old_capacity, new_capacity, "slot pool grew");
    }
}

impl<T, I: Index> SlotPool<T, I> {
    /// Number of live records (the null sentinel is not counted).
    #[inline]
    pub const fn len(&self) -> usize {
        self.count - 1
    }

    /// Returns `true` if no records are live.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 1
    }

    /// Number of slots, null included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if `index` is in range and its slot is occupied.
    ///
    /// Null is always occupied.
    #[inline]
    pub fn is_occupied(&self, index: I) -> bool {
        let i = index.as_usize();
        i < self.capacity() && self.occupied.get(i)
    }

    /// Returns the record at `index`.
    ///
    /// Precondition: `index` is non-null and occupied.
    #[inline]
    pub fn get(&self, index: I) -> &T {
        debug_assert!(self.is_live(index), "reading non-live slot {index:?}");
        &self.records[index.as_usize()]
    }

    /// Returns the record at `index` mutably.
    ///
    /// Precondition: `index` is non-null and occupied.
    #[inline]
    pub fn get_mut(&mut self, index: I) -> &mut T {
        debug_assert!(self.is_live(index), "writing non-live slot {index:?}");
        &mut self.records[index.as_usize()]
    }

    /// Checked [`get`](Self::get).
    #[inline]
    pub fn try_get(&self, index: I) -> Result<&T, InvalidIndex> {
        self.validate(index)?;
        Ok(&self.records[index.as_usize()])
    }

    /// Checked [`get_mut`](Self::get_mut).
    #[inline]
    pub fn try_get_mut(&mut self, index: I) -> Result<&mut T, InvalidIndex> {
        self.validate(index)?;
        Ok(&mut self.records[index.as_usize()])
    }

    /// Iterates live records in index order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        // Slot 0 is always the first set bit.
        self.occupied
            .iter_ones()
            .skip(1)
            .map(|i| (I::from_usize(i), &self.records[i]))
    }

    #[inline]
    fn is_live(&self, index: I) -> bool {
        index.is_some() && self.is_occupied(index)
    }

    fn validate(&self, index: I) -> Result<(), InvalidIndex> {
        let i = index.as_usize();
        if index.is_null() {
            Err(InvalidIndex::Null)
        } else if i >= self.capacity() {
            Err(InvalidIndex::OutOfRange {
                index: i,
                capacity: self.capacity(),
            })
        } else if !self.occupied.get(i) {
            Err(InvalidIndex::Vacant { index: i })
        } else {
            Ok(())
        }
    }
}
