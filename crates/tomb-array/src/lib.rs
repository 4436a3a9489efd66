//! A growable array with tombstone deletion and amortised compaction.
//!
//! [`TombstoneArray`] keeps its elements in a single buffer of tagged slots.
//! Removals from the front or the middle mark a slot deleted instead of
//! shifting the tail; a later stable compaction pass reclaims all
//! tombstones at once.
//!
//! # Layout
//!
//! ```text
//! physical:  0      1       2      3      4      5 .. capacity
//!          [Busy][Deleted][Busy][Busy][Empty][Empty ...]
//! logical:    0             1     2
//!          \_______ physical extent ______/
//! ```
//!
//! - **Clean** (no tombstones): logical index `k` is physical slot `k`.
//! - **Dirty**: logical index `k` is the `k`-th busy slot, found by a scan.
//! - Compaction runs once `deleted >= floor(physical * deleted_fraction_limit)`.
//!
//! # Logging
//!
//! With the `tracing` feature enabled, compactions and reallocations emit
//! `trace`-level events. Errors are returned, never logged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod iter;
mod ops;
mod slot;
mod storage;

pub use array::TombstoneArray;
pub use iter::{IntoIter, Iter, IterMut};
pub use tomb_core::{ArrayConfig, ArrayError, ErrorKind, SlotState};
