//! Growth and compaction parameters.

use crate::error::ConfigError;

/// Configuration for a tombstone array.
///
/// Controls the starting capacity, how many spare slots each growth adds,
/// and the tombstone fraction that triggers automatic compaction.
/// Validated at construction; immutable for the array's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayConfig {
    /// Capacity of a freshly constructed empty array.
    ///
    /// Default: 15. Pre-sized constructors allocate `len + initial_capacity`.
    pub initial_capacity: usize,

    /// Spare slots added beyond the required length when the buffer grows.
    ///
    /// Default: 15. Must be at least 1.
    pub growth_step: usize,

    /// Fraction of the physical extent that may be tombstones before the
    /// next removal compacts the buffer.
    ///
    /// Default: 0.15. Must lie in `(0, 1]`; a limit above 1 could strand a
    /// trailing tombstone after the last live element is removed.
    pub deleted_fraction_limit: f64,
}

impl ArrayConfig {
    /// Default capacity and growth step.
    pub const DEFAULT_CAPACITY: usize = 15;

    /// Default tombstone fraction limit.
    pub const DEFAULT_DELETED_FRACTION_LIMIT: f64 = 0.15;

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_CAPACITY,
            growth_step: Self::DEFAULT_CAPACITY,
            deleted_fraction_limit: Self::DEFAULT_DELETED_FRACTION_LIMIT,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limit = self.deleted_fraction_limit;
        if limit.is_nan() || limit <= 0.0 || limit > 1.0 {
            return Err(ConfigError::InvalidDeletedFraction { value: limit });
        }
        if self.growth_step == 0 {
            return Err(ConfigError::ZeroGrowthStep);
        }
        Ok(())
    }

    /// Tombstone count at which compaction runs for a given physical extent:
    /// `floor(physical * deleted_fraction_limit)`.
    pub fn compaction_threshold(&self, physical: usize) -> usize {
        (physical as f64 * self.deleted_fraction_limit) as usize
    }

    /// Capacity reserved by a pre-sized constructor for `len` elements.
    pub fn sized_capacity(&self, len: usize) -> usize {
        len + self.initial_capacity
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
