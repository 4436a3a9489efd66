//! Tagged storage slots.

use tomb_core::SlotState;

/// One physical slot: the value and its state tag in a single cell.
///
/// Tombstones drop their value at deletion time; only live slots own a `T`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot<T> {
    Empty,
    Busy(T),
    Deleted,
}

impl<T> Slot<T> {
    pub(crate) fn state(&self) -> SlotState {
        match self {
            Self::Empty => SlotState::Empty,
            Self::Busy(_) => SlotState::Busy,
            Self::Deleted => SlotState::Deleted,
        }
    }

    pub(crate) fn is_busy(&self) -> bool {
        matches!(self, Self::Busy(_))
    }

    pub(crate) fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Self::Busy(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Busy(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn into_value(self) -> Option<T> {
        match self {
            Self::Busy(value) => Some(value),
            _ => None,
        }
    }

    /// Replace a live slot and hand back its value.
    ///
    /// # Panics
    ///
    /// Panics if the slot is not live; callers only reach here through a
    /// translated index, so a miss means the slot bookkeeping is corrupt.
    pub(crate) fn take(&mut self, replacement: Slot<T>) -> T {
        match std::mem::replace(self, replacement) {
            Self::Busy(value) => value,
            other => panic!("expected a busy slot, found {}", other.state()),
        }
    }
}
