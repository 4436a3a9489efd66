//! Physical slot states.

use std::fmt;

/// State of one physical slot in a tombstone array.
///
/// Slots below the physical extent are either [`Busy`](Self::Busy) or
/// [`Deleted`](Self::Deleted); every slot past it is [`Empty`](Self::Empty).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// Never written, or released by a trailing removal.
    Empty,
    /// Holds a live element.
    Busy,
    /// Tombstone: logically absent, awaiting compaction.
    Deleted,
}

impl SlotState {
    /// Whether the slot holds a live element.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Whether the slot is a tombstone.
    pub fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Busy => write!(f, "busy"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}
