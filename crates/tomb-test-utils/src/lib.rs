//! Test utilities and reference models for tomb development.
//!
//! Provides an [`Oracle`] that mirrors every array operation on a plain
//! `Vec`, an [`Op`] enum for scripted or generated operation sequences,
//! and fixture builders in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tomb_array::TombstoneArray;
use tomb_core::{ArrayError, ErrorKind};

/// One array operation, with indices interpreted modulo the live length
/// where an in-range index is wanted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    PushFront(i32),
    PushBack(i32),
    /// Index is taken modulo `len + 1`.
    Insert(usize, i32),
    /// Index is taken modulo `len`.
    Erase(usize),
    /// Index is taken modulo `len`.
    Emplace(usize, i32),
    PopFront,
    PopBack,
    Compact,
    Clear,
    ShrinkToFit,
    Reserve(usize),
    Resize(usize),
}

/// Reference model: the same contract over a plain `Vec`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Oracle {
    pub values: Vec<i32>,
}

impl Oracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Apply `op`, returning the error kind the array is expected to report.
    pub fn apply(&mut self, op: &Op) -> Result<(), ErrorKind> {
        let len = self.values.len();
        match *op {
            Op::PushFront(v) => self.values.insert(0, v),
            Op::PushBack(v) => self.values.push(v),
            Op::Insert(i, v) => self.values.insert(i % (len + 1), v),
            Op::Erase(i) => {
                if len == 0 {
                    return Err(ErrorKind::Logic);
                }
                self.values.remove(i % len);
            }
            Op::Emplace(i, v) => {
                if len == 0 {
                    return Err(ErrorKind::OutOfRange);
                }
                self.values[i % len] = v;
            }
            Op::PopFront => {
                if len == 0 {
                    return Err(ErrorKind::Logic);
                }
                self.values.remove(0);
            }
            Op::PopBack => {
                if self.values.pop().is_none() {
                    return Err(ErrorKind::Logic);
                }
            }
            Op::Compact | Op::ShrinkToFit | Op::Reserve(_) => {}
            Op::Clear => self.values.clear(),
            Op::Resize(n) => self.values.resize(n, 0),
        }
        Ok(())
    }
}

/// Apply `op` to an array, mapping indices the same way [`Oracle::apply`] does.
pub fn apply(array: &mut TombstoneArray<i32>, op: &Op) -> Result<(), ArrayError> {
    let len = array.len();
    match *op {
        Op::PushFront(v) => array.push_front(v),
        Op::PushBack(v) => array.push_back(v),
        Op::Insert(i, v) => array.insert(i % (len + 1), v)?,
        Op::Erase(i) => {
            array.erase(if len == 0 { i } else { i % len })?;
        }
        Op::Emplace(i, v) => array.emplace(if len == 0 { i } else { i % len }, v)?,
        Op::PopFront => {
            array.pop_front()?;
        }
        Op::PopBack => {
            array.pop_back()?;
        }
        Op::Compact => array.compact(),
        Op::Clear => array.clear(),
        Op::ShrinkToFit => array.shrink_to_fit(),
        Op::Reserve(n) => array.reserve(n),
        Op::Resize(n) => array.resize(n),
    }
    Ok(())
}

/// Check every bookkeeping invariant of `array` through its public surface.
///
/// Panics with a description of the first violation.
pub fn assert_invariants(array: &TombstoneArray<i32>) {
    let physical = array.physical_len();
    let deleted = array.deleted_count();
    let capacity = array.capacity();
    assert!(deleted <= physical, "deleted {deleted} > physical {physical}");
    assert!(physical <= capacity, "physical {physical} > capacity {capacity}");
    assert_eq!(array.is_clean(), deleted == 0, "clean flag out of sync");

    let mut busy = 0;
    let mut tombstones = 0;
    for slot in 0..capacity {
        let state = array.slot_state(slot).expect("slot below capacity");
        if slot >= physical {
            assert_eq!(state, tomb_core::SlotState::Empty, "slot {slot} past extent");
            continue;
        }
        match state {
            tomb_core::SlotState::Busy => busy += 1,
            tomb_core::SlotState::Deleted => tombstones += 1,
            tomb_core::SlotState::Empty => panic!("empty slot {slot} inside extent"),
        }
    }
    assert_eq!(busy, array.len(), "busy slots disagree with len");
    assert_eq!(tombstones, deleted, "tombstones disagree with deleted_count");
    if physical > 0 {
        assert_eq!(
            array.slot_state(physical - 1),
            Some(tomb_core::SlotState::Busy),
            "trailing slot is not live"
        );
    }
}

/// Check that `array` holds exactly the oracle's values, via indexing.
pub fn assert_matches(array: &TombstoneArray<i32>, oracle: &Oracle) {
    assert_eq!(array.len(), oracle.len(), "length mismatch");
    assert_eq!(array.is_empty(), oracle.is_empty(), "emptiness mismatch");
    for (k, want) in oracle.values.iter().enumerate() {
        assert_eq!(array.get(k), Ok(want), "value mismatch at logical {k}");
    }
}
