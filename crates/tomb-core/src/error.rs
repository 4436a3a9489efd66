//! Error types for the tomb workspace.
//!
//! Three recoverable kinds are surfaced to callers: invalid arguments,
//! out-of-range indices, and logic errors (removal or search on an empty
//! array). Internal index-translation failures are not represented here;
//! they indicate a broken invariant and panic instead.

use std::error::Error;
use std::fmt;

/// Coarse classification of an [`ArrayError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A size or source argument was nonsensical.
    InvalidArgument,
    /// A logical index was outside the live range.
    OutOfRange,
    /// The operation requires at least one element.
    Logic,
}

/// Errors returned by array operations and the helpers built on them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A size parameter or source buffer was unusable.
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// A logical index was not below the current logical size.
    OutOfRange {
        /// The requested logical index.
        index: usize,
        /// Logical size at the time of the call.
        len: usize,
    },
    /// A removal or search was attempted on an empty array.
    NoElements {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl ArrayError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NoElements { .. } => ErrorKind::Logic,
        }
    }

    /// Build an [`ArrayError::InvalidArgument`] from a reason.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
            Self::NoElements { operation } => {
                write!(f, "{operation}: there are no elements in the array")
            }
        }
    }
}

impl Error for ArrayError {}

/// Errors from [`ArrayConfig::validate`](crate::ArrayConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The tombstone fraction is NaN, not positive, or above 1.
    InvalidDeletedFraction {
        /// The rejected value.
        value: f64,
    },
    /// Growth would not add any slots.
    ZeroGrowthStep,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDeletedFraction { value } => {
                write!(f, "deleted fraction limit must be in (0, 1], got {value}")
            }
            Self::ZeroGrowthStep => write!(f, "growth step must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

impl From<ConfigError> for ArrayError {
    fn from(err: ConfigError) -> Self {
        ArrayError::invalid_argument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(
            ArrayError::invalid_argument("size").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ArrayError::OutOfRange { index: 3, len: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            ArrayError::NoElements {
                operation: "pop_front"
            }
            .kind(),
            ErrorKind::Logic
        );
    }

    #[test]
    fn display_mentions_operation() {
        let err = ArrayError::NoElements {
            operation: "pop_back",
        };
        assert_eq!(
            err.to_string(),
            "pop_back: there are no elements in the array"
        );
    }

    #[test]
    fn config_error_converts_to_invalid_argument() {
        let err: ArrayError = ConfigError::ZeroGrowthStep.into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("growth step"));
    }
}
