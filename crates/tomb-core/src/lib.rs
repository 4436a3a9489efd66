//! Core types for the tomb workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the array and its helpers: the per-slot
//! state tag, the error taxonomy, and the growth/compaction config.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod slot;

pub use config::ArrayConfig;
pub use error::{ArrayError, ConfigError, ErrorKind};
pub use slot::SlotState;
