//! Insertion and removal.
//!
//! Front and middle removals bury the slot as a tombstone. Trailing removal
//! releases the slot outright and never leaves a tombstone, so the last slot
//! of the physical extent is always live.

use tomb_core::ArrayError;

use crate::array::TombstoneArray;
use crate::slot::Slot;

impl<T> TombstoneArray<T> {
    /// Insert `value` before every live element.
    ///
    /// Reuses a tombstone in physical slot 0 when there is one; otherwise
    /// the physical extent shifts right by one slot.
    pub fn push_front(&mut self, value: T) {
        if self.physical > 0 && self.slots[0].is_deleted() {
            self.slots[0] = Slot::Busy(value);
            self.deleted -= 1;
            self.clean = self.deleted == 0;
            return;
        }
        self.make_room();
        self.slots[..=self.physical].rotate_right(1);
        self.slots[0] = Slot::Busy(value);
        self.physical += 1;
    }

    /// Append `value` after every live element.
    pub fn push_back(&mut self, value: T) {
        self.make_room();
        self.slots[self.physical] = Slot::Busy(value);
        self.physical += 1;
    }

    /// Insert `value` so that it lands at logical `index`.
    ///
    /// `index == len()` appends. Anything larger is `OutOfRange`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let len = self.len();
        if index > len {
            return Err(ArrayError::OutOfRange { index, len });
        }
        // Growth may compact, so translate afterwards.
        self.make_room();
        let at = if index == len {
            self.physical
        } else {
            self.physical_index(index)?
        };
        self.slots[at..=self.physical].rotate_right(1);
        self.slots[at] = Slot::Busy(value);
        self.physical += 1;
        Ok(())
    }

    /// Remove the first live element, leaving a tombstone.
    pub fn pop_front(&mut self) -> Result<T, ArrayError> {
        if self.is_empty() {
            return Err(ArrayError::NoElements {
                operation: "pop_front",
            });
        }
        let first = self.physical_index(0)?;
        Ok(self.bury(first))
    }

    /// Remove the last live element without leaving a tombstone.
    ///
    /// Never increases `deleted_count`. Tombstones that become trailing
    /// once the element is gone are released along with it.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        if self.is_empty() {
            return Err(ArrayError::NoElements {
                operation: "pop_back",
            });
        }
        let last = self.slots[..self.physical]
            .iter()
            .rposition(Slot::is_busy)
            .expect("non-empty array has a live slot");
        debug_assert_eq!(last + 1, self.physical, "trailing tombstone");
        let value = self.slots[last].take(Slot::Empty);
        self.physical = last;
        while self.physical > 0 && self.slots[self.physical - 1].is_deleted() {
            self.physical -= 1;
            self.slots[self.physical] = Slot::Empty;
            self.deleted -= 1;
        }
        self.clean = self.deleted == 0;
        Ok(value)
    }

    /// Remove the element at logical `index`.
    ///
    /// The last live element goes through [`pop_back`](Self::pop_back);
    /// any other leaves a tombstone.
    pub fn erase(&mut self, index: usize) -> Result<T, ArrayError> {
        if self.is_empty() {
            return Err(ArrayError::NoElements { operation: "erase" });
        }
        let at = self.physical_index(index)?;
        if at + 1 == self.physical {
            return self.pop_back();
        }
        Ok(self.bury(at))
    }

    /// Tombstone a live slot and compact once the threshold is reached.
    fn bury(&mut self, physical: usize) -> T {
        let value = self.slots[physical].take(Slot::Deleted);
        self.deleted += 1;
        self.clean = false;
        if self.deleted >= self.config.compaction_threshold(self.physical) {
            self.compact();
        }
        value
    }

    /// Guarantee a free slot at `physical` before an insertion.
    ///
    /// Grows to `len + 1 + growth_step` when the logical size after the
    /// insertion would reach the capacity, or when tombstones have used up
    /// the physical extent.
    fn make_room(&mut self) {
        let needed = self.len() + 1;
        if needed >= self.capacity() || self.physical == self.capacity() {
            self.reserve(needed + self.config.growth_step);
        }
    }
}
