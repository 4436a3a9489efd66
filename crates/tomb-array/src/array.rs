//! The [`TombstoneArray`] type: construction, accessors and index translation.
//!
//! Insertion and removal live in `ops.rs`; compaction and capacity
//! management live in `storage.rs`.

use std::fmt;
use std::ops::{Index, IndexMut};

use tomb_core::{ArrayConfig, ArrayError, SlotState};

use crate::iter::{IntoIter, Iter, IterMut};
use crate::slot::Slot;

/// A growable array whose removals leave tombstones behind.
///
/// Removing from the front or the middle marks the slot deleted instead of
/// shifting the tail. Tombstones are purged in one stable pass once they
/// make up `deleted_fraction_limit` of the physical extent, so the shifting
/// cost is paid once per batch of deletions rather than once per deletion.
///
/// While the array is *clean* (no tombstones), logical index `k` is physical
/// slot `k`. Otherwise a lookup scans for the `k`-th live slot.
///
/// ```
/// use tomb_array::TombstoneArray;
///
/// let mut array = TombstoneArray::from([1, 2, 3, 4, 5]);
/// array.erase(1).unwrap();
/// array.erase(1).unwrap();
/// assert_eq!(array, TombstoneArray::from([1, 4, 5]));
/// ```
pub struct TombstoneArray<T> {
    /// One slot per unit of capacity.
    pub(crate) slots: Vec<Slot<T>>,
    /// Slots `[0, physical)` are busy or deleted; the rest are empty.
    pub(crate) physical: usize,
    /// Tombstones within `[0, physical)`.
    pub(crate) deleted: usize,
    /// `deleted == 0`.
    pub(crate) clean: bool,
    pub(crate) config: ArrayConfig,
}

impl<T> TombstoneArray<T> {
    /// Create an empty array with the default capacity.
    pub fn new() -> Self {
        Self::with_valid_config(ArrayConfig::new())
    }

    /// Create an empty array using a custom growth/compaction config.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ArrayConfig) -> Self {
        Self {
            slots: empty_slots(config.initial_capacity),
            physical: 0,
            deleted: 0,
            clean: true,
            config,
        }
    }

    /// Build a clean array from owned values, reserving `len + C0` slots.
    pub(crate) fn from_vec_with(values: Vec<T>, config: ArrayConfig) -> Self {
        let len = values.len();
        let capacity = config.sized_capacity(len);
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(values.into_iter().map(Slot::Busy));
        slots.resize_with(capacity, || Slot::Empty);
        Self {
            slots,
            physical: len,
            deleted: 0,
            clean: true,
            config,
        }
    }

    /// Logical size: the number of live elements.
    pub fn len(&self) -> usize {
        self.physical - self.deleted
    }

    /// Total allocated slots, live or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no live elements.
    ///
    /// Checks the slot tags rather than the counters alone, so it stays
    /// correct while tombstones are present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0 || !self.slots[..self.physical].iter().any(Slot::is_busy)
    }

    /// Whether the logical size has reached the capacity.
    ///
    /// This compares the *logical* size, so it can report `false` while the
    /// physical extent is exhausted by tombstones. Growth does not rely on it.
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Number of tombstones awaiting compaction.
    pub fn deleted_count(&self) -> usize {
        self.deleted
    }

    /// Physical extent: live slots plus tombstones.
    pub fn physical_len(&self) -> usize {
        self.physical
    }

    /// Whether logical and physical indices currently coincide.
    pub fn is_clean(&self) -> bool {
        self.clean
    }

    /// State of the physical slot at `physical`, or `None` past the capacity.
    pub fn slot_state(&self, physical: usize) -> Option<SlotState> {
        self.slots.get(physical).map(Slot::state)
    }

    /// The growth/compaction config this array was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Translate a logical index to its physical slot.
    ///
    /// O(1) while clean, otherwise a scan over the physical extent.
    ///
    /// # Panics
    ///
    /// Panics if the live-slot count disagrees with the counters. That can
    /// only happen if the slot bookkeeping is corrupt.
    pub fn physical_index(&self, index: usize) -> Result<usize, ArrayError> {
        let len = self.len();
        if index >= len {
            return Err(ArrayError::OutOfRange { index, len });
        }
        if self.clean {
            return Ok(index);
        }
        let found = self.slots[..self.physical]
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_busy())
            .nth(index)
            .map(|(physical, _)| physical);
        match found {
            Some(physical) => Ok(physical),
            None => panic!(
                "internal consistency error: no live slot for logical index {index} \
                 (physical {}, deleted {})",
                self.physical, self.deleted
            ),
        }
    }

    /// Element at logical `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let physical = self.physical_index(index)?;
        Ok(live(&self.slots[physical]))
    }

    /// Mutable element at logical `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let physical = self.physical_index(index)?;
        Ok(live_mut(&mut self.slots[physical]))
    }

    /// First live element.
    pub fn front(&self) -> Result<&T, ArrayError> {
        self.get(0)
    }

    /// Last live element.
    pub fn back(&self) -> Result<&T, ArrayError> {
        match self.len().checked_sub(1) {
            Some(last) => self.get(last),
            None => Err(ArrayError::OutOfRange { index: 0, len: 0 }),
        }
    }

    /// Overwrite the element at logical `index`.
    pub fn emplace(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Swap the elements at two logical indices.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ArrayError> {
        let pa = self.physical_index(a)?;
        let pb = self.physical_index(b)?;
        self.slots.swap(pa, pb);
        Ok(())
    }

    /// Iterate over live elements in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.physical], self.len())
    }

    /// Iterate mutably over live elements in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len();
        IterMut::new(&mut self.slots[..self.physical], len)
    }
}

impl<T: Default> TombstoneArray<T> {
    /// Create an array of `len` default-valued elements.
    pub fn with_len(len: usize) -> Self {
        let values = std::iter::repeat_with(T::default).take(len).collect();
        Self::from_vec_with(values, ArrayConfig::new())
    }
}

impl<T: Clone> TombstoneArray<T> {
    /// Copy a clean array from a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_vec_with(values.to_vec(), ArrayConfig::new())
    }

    /// Copy the first `len` values of `source`.
    ///
    /// Fails with `InvalidArgument` if `source` holds fewer than `len` values.
    pub fn from_prefix(len: usize, source: &[T]) -> Result<Self, ArrayError> {
        if source.len() < len {
            return Err(ArrayError::invalid_argument(format!(
                "source holds {} values but {len} were requested",
                source.len()
            )));
        }
        Ok(Self::from_slice(&source[..len]))
    }

    /// Copy the first `len` values of `values`, where `len` is mandatory.
    ///
    /// Fails with `InvalidArgument` if `len` is zero or exceeds `values`.
    pub fn with_len_from(len: usize, values: &[T]) -> Result<Self, ArrayError> {
        if len == 0 {
            return Err(ArrayError::invalid_argument("size must be > 0"));
        }
        Self::from_prefix(len, values)
    }

    /// Replace this array's contents and state with a deep copy of `other`.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Slot<T>> {
    std::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

fn live<T>(slot: &Slot<T>) -> &T {
    match slot.value() {
        Some(value) => value,
        None => panic!("translated index landed on a {} slot", slot.state()),
    }
}

fn live_mut<T>(slot: &mut Slot<T>) -> &mut T {
    let state = slot.state();
    match slot.value_mut() {
        Some(value) => value,
        None => panic!("translated index landed on a {state} slot"),
    }
}

impl<T> Default for TombstoneArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for TombstoneArray<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            physical: self.physical,
            deleted: self.deleted,
            clean: self.clean,
            config: self.config.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.slots.clone_from(&source.slots);
        self.physical = source.physical;
        self.deleted = source.deleted;
        self.clean = source.clean;
        self.config.clone_from(&source.config);
    }
}

impl<T: fmt::Debug> fmt::Debug for TombstoneArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Arrays compare by their live elements only; tombstone layout and
/// capacity are ignored.
impl<T: PartialEq> PartialEq for TombstoneArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for TombstoneArray<T> {}

impl<T> Index<usize> for TombstoneArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for TombstoneArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for TombstoneArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec_with(values, ArrayConfig::new())
    }
}

impl<T, const N: usize> From<[T; N]> for TombstoneArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_vec_with(Vec::from(values), ArrayConfig::new())
    }
}

impl<T> FromIterator<T> for TombstoneArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for TombstoneArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for TombstoneArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let len = self.len();
        self.slots.truncate(self.physical);
        IntoIter::new(self.slots, len)
    }
}

impl<'a, T> IntoIterator for &'a TombstoneArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut TombstoneArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
