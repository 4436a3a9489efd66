//! Compaction and capacity management.
//!
//! Every capacity change compacts first, so a reallocation only ever moves
//! live slots and the new buffer starts out clean.

use crate::array::TombstoneArray;
use crate::slot::Slot;

impl<T> TombstoneArray<T> {
    /// Physically remove all tombstones.
    ///
    /// Live slots keep their relative order. Afterwards the array is clean
    /// and logical indices equal physical ones. O(physical extent); a no-op
    /// when already clean.
    pub fn compact(&mut self) {
        if self.deleted == 0 {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            physical = self.physical,
            deleted = self.deleted,
            "compacting tombstones"
        );
        let live = self.len();
        let mut write = 0;
        for read in 0..self.physical {
            if self.slots[read].is_busy() {
                self.slots.swap(write, read);
                write += 1;
            }
        }
        debug_assert_eq!(write, live);
        for slot in &mut self.slots[live..self.physical] {
            *slot = Slot::Empty;
        }
        self.physical = live;
        self.deleted = 0;
        self.clean = true;
    }

    /// Drop every element, keeping the buffer.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.physical] {
            *slot = Slot::Empty;
        }
        self.physical = 0;
        self.deleted = 0;
        self.clean = true;
    }

    /// Compact, then release every slot beyond the logical size.
    pub fn shrink_to_fit(&mut self) {
        self.compact();
        if self.capacity() > self.len() {
            self.reallocate(self.len());
        }
    }

    /// Compact, then grow the buffer to `new_capacity` total slots.
    ///
    /// Unlike `Vec::reserve` the argument is a total, not an increment.
    /// Requests at or below the current capacity only compact.
    pub fn reserve(&mut self, new_capacity: usize) {
        self.compact();
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Move the live prefix into a fresh buffer of exactly `capacity` slots.
    ///
    /// Callers compact first, so `[0, physical)` is all live.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(self.clean && capacity >= self.physical);
        #[cfg(feature = "tracing")]
        tracing::trace!(from = self.capacity(), to = capacity, "reallocating slots");
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(self.slots.drain(..self.physical));
        slots.resize_with(capacity, || Slot::Empty);
        self.slots = slots;
    }

    /// Compact, then truncate or extend the logical size to `new_size`,
    /// filling new elements from `fill`.
    ///
    /// Growing past the capacity reserves `new_size + growth_step`.
    pub fn resize_with<F>(&mut self, new_size: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        self.compact();
        let len = self.len();
        if new_size == len {
            return;
        }
        if new_size < len {
            for slot in &mut self.slots[new_size..len] {
                *slot = Slot::Empty;
            }
        } else {
            if new_size >= self.capacity() {
                self.reserve(new_size + self.config.growth_step);
            }
            for slot in &mut self.slots[len..new_size] {
                *slot = Slot::Busy(fill());
            }
        }
        self.physical = new_size;
    }
}

impl<T: Default> TombstoneArray<T> {
    /// Compact, then truncate or extend to `new_size` with default values.
    pub fn resize(&mut self, new_size: usize) {
        self.resize_with(new_size, T::default);
    }
}
