//! Iterators over the live elements of a [`TombstoneArray`](crate::TombstoneArray).
//!
//! All three skip tombstones and yield elements in logical order. Each
//! knows the live count up front, so they are exact-size.

use std::iter::FusedIterator;

use crate::slot::Slot;

/// Borrowing iterator, created by [`TombstoneArray::iter`](crate::TombstoneArray::iter).
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>], live: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: live,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.slots.by_ref().find_map(Slot::value)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.slots.by_ref().rev().find_map(Slot::value)?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator, created by [`TombstoneArray::iter_mut`](crate::TombstoneArray::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: std::slice::IterMut<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Slot<T>], live: usize) -> Self {
        Self {
            slots: slots.iter_mut(),
            remaining: live,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let value = self.slots.by_ref().find_map(Slot::value_mut)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.slots.by_ref().rev().find_map(Slot::value_mut)?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, created by `TombstoneArray::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Slot<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<Slot<T>>, live: usize) -> Self {
        Self {
            slots: slots.into_iter(),
            remaining: live,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.slots.by_ref().find_map(Slot::into_value)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let value = self.slots.by_ref().rev().find_map(Slot::into_value)?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
