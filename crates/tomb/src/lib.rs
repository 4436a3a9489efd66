//! Tomb: a growable array with lazy tombstone deletion.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! tomb sub-crates. For most users, adding `tomb` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tomb::prelude::*;
//!
//! let mut array: TombstoneArray<i32> = (0..40).collect();
//!
//! // Front and middle removals leave tombstones behind.
//! assert_eq!(array.pop_front(), Ok(0));
//! assert_eq!(array.erase(9), Ok(10));
//! assert_eq!(array.deleted_count(), 2);
//!
//! // Indexing is logical: tombstones are skipped.
//! assert_eq!(array[0], 1);
//! assert_eq!(array[9], 11);
//!
//! // Search and shuffle only see live elements.
//! assert_eq!(find_first(&array, &11), Ok(9));
//! assert_eq!(find_all(&array, &10).unwrap().as_slice(), &[NOT_FOUND]);
//! shuffle_seeded(&mut array, 42);
//! assert_eq!(array.len(), 38);
//!
//! // An explicit compaction reclaims every tombstone at once.
//! array.compact();
//! assert!(array.is_clean());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tomb-core` | Errors, `ArrayConfig`, `SlotState` |
//! | [`array`] | `tomb-array` | `TombstoneArray` and its iterators |
//! | [`algo`] | `tomb-algo` | Search and shuffle helpers |
//!
//! # Features
//!
//! - `tracing`: emit `trace`-level events for compaction and reallocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, configuration, and slot states (`tomb-core`).
pub use tomb_core as types;

/// The array itself and its iterators (`tomb-array`).
///
/// See [`array::TombstoneArray`].
pub use tomb_array as array;

/// Linear search and Fisher-Yates shuffle (`tomb-algo`).
pub use tomb_algo as algo;

/// Common imports for typical tomb usage.
///
/// ```rust
/// use tomb::prelude::*;
/// ```
pub mod prelude {
    // Array
    pub use tomb_array::TombstoneArray;

    // Configuration and errors
    pub use tomb_core::{ArrayConfig, ArrayError, ConfigError, ErrorKind};

    // Helpers
    pub use tomb_algo::{
        find_all, find_first, find_last, shuffle, shuffle_seeded, shuffle_with, NOT_FOUND,
    };
}
