//! Linear searches over the logical view.

use smallvec::{smallvec, SmallVec};
use tomb_array::TombstoneArray;
use tomb_core::ArrayError;

/// Returned by [`find_first`] and [`find_last`] when nothing matches, and
/// as the single element of [`find_all`]'s result in the same case.
pub const NOT_FOUND: isize = -1;

/// Logical indices produced by [`find_all`].
///
/// A lone [`NOT_FOUND`] entry means no element matched; an empty result
/// never occurs. Check the sentinel, not the length.
pub type Matches = SmallVec<[isize; 8]>;

fn non_empty<T>(array: &TombstoneArray<T>, operation: &'static str) -> Result<(), ArrayError> {
    if array.is_empty() {
        return Err(ArrayError::NoElements { operation });
    }
    Ok(())
}

/// Logical index of the first element equal to `value`, or [`NOT_FOUND`].
///
/// # Errors
///
/// [`ArrayError::NoElements`] if the array is empty.
pub fn find_first<T: PartialEq>(array: &TombstoneArray<T>, value: &T) -> Result<isize, ArrayError> {
    non_empty(array, "find_first")?;
    Ok(array
        .iter()
        .position(|v| v == value)
        .map_or(NOT_FOUND, |k| k as isize))
}

/// Logical index of the last element equal to `value`, or [`NOT_FOUND`].
///
/// # Errors
///
/// [`ArrayError::NoElements`] if the array is empty.
pub fn find_last<T: PartialEq>(array: &TombstoneArray<T>, value: &T) -> Result<isize, ArrayError> {
    non_empty(array, "find_last")?;
    Ok(array
        .iter()
        .rposition(|v| v == value)
        .map_or(NOT_FOUND, |k| k as isize))
}

/// Every logical index holding an element equal to `value`, ascending.
///
/// Returns `[NOT_FOUND]` when nothing matches.
///
/// # Errors
///
/// [`ArrayError::NoElements`] if the array is empty.
pub fn find_all<T: PartialEq>(array: &TombstoneArray<T>, value: &T) -> Result<Matches, ArrayError> {
    non_empty(array, "find_all")?;
    let found: Matches = array
        .iter()
        .enumerate()
        .filter(|(_, v)| *v == value)
        .map(|(k, _)| k as isize)
        .collect();
    if found.is_empty() {
        return Ok(smallvec![NOT_FOUND]);
    }
    Ok(found)
}
