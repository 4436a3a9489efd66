//! Search and shuffle helpers for [`TombstoneArray`].
//!
//! Both families are plain callers of the array's logical-index contract:
//! they never look at slots or tombstones, only at `len()`, indexing and
//! [`TombstoneArray::swap`].
//!
//! - [`search`]: linear scans returning logical indices, with a `-1`
//!   not-found sentinel.
//! - [`shuffle`]: in-place Fisher-Yates permutations, from OS entropy, a
//!   caller-supplied engine, or a reproducible seed.
//!
//! [`TombstoneArray`]: tomb_array::TombstoneArray
//! [`TombstoneArray::swap`]: tomb_array::TombstoneArray::swap

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod search;
pub mod shuffle;

pub use search::{find_all, find_first, find_last, Matches, NOT_FOUND};
pub use shuffle::{shuffle, shuffle_seeded, shuffle_with};
