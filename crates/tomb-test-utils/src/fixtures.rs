//! Reusable array fixtures.
//!
//! - [`sequential`]: a clean array holding `0..len`.
//! - [`with_tombstones`]: an array holding `0..len` with chosen values
//!   buried as tombstones, kept below the compaction threshold.

use tomb_array::TombstoneArray;

/// A clean array holding `0..len`.
pub fn sequential(len: i32) -> TombstoneArray<i32> {
    (0..len).collect()
}

/// An array holding `0..len` with every value in `buried` erased.
///
/// Panics if erasing them would reach the compaction threshold (the
/// fixture would come back clean) or if a buried value is the last one.
pub fn with_tombstones(len: i32, buried: &[i32]) -> TombstoneArray<i32> {
    let mut array = sequential(len);
    for value in buried {
        let index = array
            .iter()
            .position(|v| v == value)
            .unwrap_or_else(|| panic!("value {value} not present"));
        array.erase(index).expect("index came from iter()");
    }
    assert_eq!(
        array.deleted_count(),
        buried.len(),
        "fixture compacted or popped; pick a larger len or fewer values"
    );
    array
}

/// Values `0..len` minus `buried`, in order.
pub fn expected_after(len: i32, buried: &[i32]) -> Vec<i32> {
    (0..len).filter(|v| !buried.contains(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_tombstones_keeps_tombstones() {
        let array = with_tombstones(40, &[0, 7, 13]);
        assert_eq!(array.deleted_count(), 3);
        assert_eq!(array.len(), 37);
        let live: Vec<i32> = array.iter().copied().collect();
        assert_eq!(live, expected_after(40, &[0, 7, 13]));
    }

    #[test]
    #[should_panic(expected = "fixture compacted")]
    fn with_tombstones_rejects_compacting_sets() {
        with_tombstones(10, &[1, 2]);
    }
}
