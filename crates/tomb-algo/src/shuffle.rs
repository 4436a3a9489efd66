//! In-place uniform shuffles over the logical view.
//!
//! All three entry points run the same Fisher-Yates pass: walk `i` from
//! the last logical index down to 1, swapping it with a uniform `j` in
//! `0..=i`. Tombstones are never touched; only live elements move.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tomb_array::TombstoneArray;

/// Shuffle `array` with a generator seeded from OS entropy.
pub fn shuffle<T>(array: &mut TombstoneArray<T>) {
    shuffle_with(array, &mut rand::rng());
}

/// Shuffle `array` with a caller-supplied generator.
///
/// No-op when the array holds fewer than two elements.
pub fn shuffle_with<T, R: Rng + ?Sized>(array: &mut TombstoneArray<T>, rng: &mut R) {
    let len = array.len();
    if len <= 1 {
        return;
    }
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        if i != j {
            array
                .swap(i, j)
                .expect("shuffle indices are within the logical size");
        }
    }
}

/// Shuffle `array` reproducibly: the same seed and contents always yield
/// the same permutation.
pub fn shuffle_seeded<T>(array: &mut TombstoneArray<T>, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffle_with(array, &mut rng);
}
