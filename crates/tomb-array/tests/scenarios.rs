//! End-to-end scenarios for the tombstone array contract.
//!
//! Each test drives the public API the way a caller would and checks the
//! observable result: logical contents, capacity, and error kinds.

use tomb_array::{ArrayError, ErrorKind, TombstoneArray};
use tomb_test_utils::fixtures::{expected_after, with_tombstones};
use tomb_test_utils::{assert_invariants, assert_matches, Oracle};

// ── Construction ────────────────────────────────────────────────────

#[test]
fn default_and_zero_sized_are_equal() {
    let empty: TombstoneArray<i32> = TombstoneArray::new();
    let zero: TombstoneArray<i32> = TombstoneArray::with_len(0);
    assert_eq!(empty, zero);
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.capacity(), 15);
}

#[test]
fn equal_sized_arrays_compare_equal() {
    let a: TombstoneArray<i32> = TombstoneArray::with_len(10);
    let b: TombstoneArray<i32> = TombstoneArray::with_len(10);
    assert_eq!(a, b);
}

#[test]
fn raw_data_copy_after_pops_is_equal() {
    let data: Vec<i32> = (1..=10).collect();
    let mut array = TombstoneArray::from_prefix(10, &data).unwrap();
    array.pop_back().unwrap();
    array.pop_front().unwrap();
    let copy = array.clone();
    assert_eq!(array, copy);
    assert_eq!(copy.len(), 8);
    assert_eq!(*copy.front().unwrap(), 2);
    assert_eq!(*copy.back().unwrap(), 9);
}

#[test]
fn copy_with_live_tombstones_matches_source() {
    let array = with_tombstones(40, &[1, 2, 3]);
    let copy = array.clone();
    assert_eq!(copy, array);
    assert_eq!(copy.deleted_count(), 3);
    assert_invariants(&copy);
}

// ── Emptiness under tombstones ──────────────────────────────────────

#[test]
fn popped_out_array_is_empty() {
    let empty: TombstoneArray<i32> = TombstoneArray::new();
    let mut drained: TombstoneArray<i32> = TombstoneArray::with_len(2);
    drained.pop_front().unwrap();
    drained.pop_front().unwrap();
    assert!(empty.is_empty());
    assert!(drained.is_empty());
}

#[test]
fn array_with_leading_tombstones_is_not_empty() {
    let array = with_tombstones(40, &[0, 1, 2, 3, 4]);
    assert!(!array.is_empty());
    assert_eq!(*array.front().unwrap(), 5);
}

// ── Front/back asymmetry ────────────────────────────────────────────

#[test]
fn pop_front_buries_and_pop_back_releases() {
    let mut array: TombstoneArray<i32> = (0..40).collect();
    array.pop_front().unwrap();
    assert_eq!(array.deleted_count(), 1);
    array.pop_back().unwrap();
    assert_eq!(array.deleted_count(), 1);
    array.erase(10).unwrap();
    assert_eq!(array.deleted_count(), 2);
    assert_invariants(&array);
}

#[test]
fn compaction_runs_on_the_triggering_removal() {
    let mut array: TombstoneArray<i32> = (0..20).collect();
    // floor(20 * 0.15) = 3
    array.erase(4).unwrap();
    array.erase(4).unwrap();
    assert_eq!(array.deleted_count(), 2);
    array.pop_front().unwrap();
    assert_eq!(array.deleted_count(), 0);
    assert!(array.is_clean());
    assert_eq!(array.physical_len(), 17);
}

// ── Index translation ───────────────────────────────────────────────

#[test]
fn at_returns_kth_survivor() {
    let buried = [0, 3, 4, 17, 30];
    let array = with_tombstones(40, &buried);
    let expected = expected_after(40, &buried);
    for (k, want) in expected.iter().enumerate() {
        assert_eq!(array[k], *want);
    }
    assert_eq!(
        array.get(expected.len()),
        Err(ArrayError::OutOfRange {
            index: expected.len(),
            len: expected.len()
        })
    );
}

#[test]
fn insert_at_end_appends_with_tombstones_present() {
    let mut array = with_tombstones(40, &[5, 6]);
    let len = array.len();
    array.insert(len, 1000).unwrap();
    assert_eq!(*array.back().unwrap(), 1000);
    assert_eq!(array.len(), len + 1);
    assert_invariants(&array);
}

// ── Errors ──────────────────────────────────────────────────────────

#[test]
fn removals_on_empty_are_logic_errors() {
    let mut array: TombstoneArray<i32> = TombstoneArray::new();
    assert_eq!(array.pop_front().unwrap_err().kind(), ErrorKind::Logic);
    assert_eq!(array.pop_back().unwrap_err().kind(), ErrorKind::Logic);
    assert_eq!(array.erase(0).unwrap_err().kind(), ErrorKind::Logic);
}

#[test]
fn failed_calls_leave_state_unchanged() {
    let mut array = with_tombstones(40, &[2, 9]);
    let before = array.clone();
    assert!(array.insert(100, 1).is_err());
    assert!(array.erase(38).is_err());
    assert!(array.emplace(38, 1).is_err());
    assert!(array.swap(0, 38).is_err());
    assert_eq!(array, before);
    assert_eq!(array.deleted_count(), 2);
    assert_eq!(array.capacity(), before.capacity());
}

// ── Capacity ────────────────────────────────────────────────────────

#[test]
fn growth_reaches_len_plus_growth_step() {
    let mut array = TombstoneArray::new();
    let mut oracle = Oracle::new();
    for v in 0..100 {
        let capacity = array.capacity();
        array.push_back(v);
        oracle.values.push(v);
        if array.capacity() != capacity {
            assert!(array.capacity() >= array.len() + 15);
        }
    }
    assert_matches(&array, &oracle);
}

#[test]
fn reserve_below_len_leaves_capacity() {
    let mut array = TombstoneArray::from([1, 2, 3, 4, 5]);
    array.reserve(4);
    assert_eq!(array.capacity(), 20);
    assert_eq!(array.len(), 5);
}

#[test]
fn shrink_after_mixed_erasures_fits_exactly() {
    let mut array: TombstoneArray<i32> = TombstoneArray::with_len(34);
    for _ in 0..3 {
        array.erase(1).unwrap();
    }
    let index = array.len() - 2;
    array.erase(index).unwrap();
    array.shrink_to_fit();
    assert_eq!(array.len(), array.capacity());
}

#[test]
fn clear_then_reuse() {
    let mut array = with_tombstones(40, &[1, 2]);
    array.clear();
    assert!(array.is_empty());
    assert!(array.is_clean());
    array.push_front(3);
    array.push_back(4);
    assert_eq!(array, TombstoneArray::from([3, 4]));
    assert_invariants(&array);
}
