//! Workload builders for the tomb benchmarks.
//!
//! - [`sparse_array`]: an array whose tombstones are never compacted away,
//!   so every access goes through index translation.
//! - [`churn_script`]: a deterministic mix of front, back and middle
//!   removals interleaved with pushes, driven by a seed.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tomb_array::{ArrayConfig, TombstoneArray};

/// Configuration that never compacts on its own.
pub fn no_compaction() -> ArrayConfig {
    ArrayConfig {
        deleted_fraction_limit: 1.0,
        ..ArrayConfig::default()
    }
}

/// `0..len` with every `stride`-th element (from index 0) buried.
///
/// The last element always stays live. Compaction is disabled so the
/// tombstones survive until an explicit `compact()`.
pub fn sparse_array(len: u32, stride: u32) -> TombstoneArray<u32> {
    assert!(stride > 0, "stride must be positive");
    let mut array = TombstoneArray::with_config(no_compaction()).unwrap();
    array.extend(0..len);
    for (erased, value) in (0..len.saturating_sub(1))
        .step_by(stride as usize)
        .enumerate()
    {
        array.erase((value - erased as u32) as usize).unwrap();
    }
    array
}

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Append a value.
    Push(u32),
    /// Remove the first live element.
    PopFront,
    /// Remove the last live element.
    PopBack,
    /// Remove the element at `index % len`.
    Erase(usize),
}

/// `steps` churn steps, roughly half pushes, reproducible from `seed`.
pub fn churn_script(steps: usize, seed: u64) -> Vec<Step> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..steps)
        .map(|i| match rng.random_range(0..8u8) {
            0..=3 => Step::Push(i as u32),
            4 => Step::PopFront,
            5 => Step::PopBack,
            _ => Step::Erase(rng.random_range(0..usize::MAX)),
        })
        .collect()
}

/// Replay `script` against `array`, skipping removals on an empty array.
pub fn run_churn(array: &mut TombstoneArray<u32>, script: &[Step]) {
    for step in script {
        if array.is_empty() && !matches!(step, Step::Push(_)) {
            continue;
        }
        let outcome = match *step {
            Step::Push(v) => {
                array.push_back(v);
                Ok(())
            }
            Step::PopFront => array.pop_front().map(drop),
            Step::PopBack => array.pop_back().map(drop),
            Step::Erase(i) => array.erase(i % array.len()).map(drop),
        };
        debug_assert!(outcome.is_ok());
    }
}
