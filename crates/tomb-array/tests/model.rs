//! Property tests: the array against a plain `Vec` reference model.

#![cfg(not(miri))]

use proptest::prelude::*;
use tomb_array::{ArrayConfig, TombstoneArray};
use tomb_test_utils::{apply, assert_invariants, assert_matches, Op, Oracle};

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        2 => any::<i32>().prop_map(Op::PushFront),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        4 => any::<usize>().prop_map(Op::Erase),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Emplace(i, v)),
        3 => Just(Op::PopFront),
        2 => Just(Op::PopBack),
        1 => Just(Op::Compact),
        1 => Just(Op::ShrinkToFit),
        1 => (0usize..128).prop_map(Op::Reserve),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => Just(Op::Clear),
    ]
}

/// Ops that drift the array well past the small-array regime first, so
/// that tombstones actually survive between compactions.
fn seeded_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..200).prop_map(|ops| {
        let mut script: Vec<Op> = (0..48).map(Op::PushBack).collect();
        script.extend(ops);
        script
    })
}

proptest! {
    #[test]
    fn matches_reference_model(ops in seeded_ops()) {
        let mut array = TombstoneArray::new();
        let mut oracle = Oracle::new();
        for op in &ops {
            let got = apply(&mut array, op).map_err(|e| e.kind());
            let want = oracle.apply(op);
            prop_assert_eq!(got, want, "op {:?}", op);
            assert_invariants(&array);
            assert_matches(&array, &oracle);
        }
    }

    #[test]
    fn tombstones_stay_below_threshold(ops in seeded_ops()) {
        let mut array = TombstoneArray::new();
        for op in &ops {
            let before = array.deleted_count();
            let _ = apply(&mut array, op);
            if array.deleted_count() > before {
                let threshold = array.config().compaction_threshold(array.physical_len());
                prop_assert!(
                    array.deleted_count() < threshold,
                    "deleted {} reached threshold {} after {:?}",
                    array.deleted_count(),
                    threshold,
                    op
                );
            }
        }
    }

    #[test]
    fn pop_back_never_adds_tombstones(ops in seeded_ops()) {
        let mut array = TombstoneArray::new();
        for op in &ops {
            let _ = apply(&mut array, op);
        }
        while !array.is_empty() {
            let before = array.deleted_count();
            array.pop_back().unwrap();
            prop_assert!(array.deleted_count() <= before);
            assert_invariants(&array);
        }
        prop_assert_eq!(array.physical_len(), 0);
    }

    #[test]
    fn equality_ignores_layout(ops in seeded_ops()) {
        let mut array = TombstoneArray::new();
        let mut oracle = Oracle::new();
        for op in &ops {
            let _ = apply(&mut array, op);
            let _ = oracle.apply(op);
        }
        let rebuilt = TombstoneArray::from(oracle.values.clone());
        prop_assert_eq!(&array, &rebuilt);
        let mut compacted = array.clone();
        compacted.compact();
        prop_assert_eq!(&array, &compacted);
        prop_assert!(compacted.is_clean());
    }

    #[test]
    fn iterators_agree_with_indexing(ops in seeded_ops()) {
        let mut array = TombstoneArray::new();
        for op in &ops {
            let _ = apply(&mut array, op);
        }
        let forward: Vec<i32> = array.iter().copied().collect();
        let indexed: Vec<i32> = (0..array.len()).map(|k| array[k]).collect();
        prop_assert_eq!(&forward, &indexed);
        let mut backward: Vec<i32> = array.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(array.iter().len(), array.len());
        let owned: Vec<i32> = array.into_iter().collect();
        prop_assert_eq!(forward, owned);
    }

    #[test]
    fn custom_config_matches_reference_model(
        limit in 0.05f64..=1.0,
        step in 1usize..8,
        initial in 0usize..20,
        ops in seeded_ops(),
    ) {
        let config = ArrayConfig {
            initial_capacity: initial,
            growth_step: step,
            deleted_fraction_limit: limit,
        };
        let mut array = TombstoneArray::with_config(config).unwrap();
        let mut oracle = Oracle::new();
        for op in &ops {
            let got = apply(&mut array, op).map_err(|e| e.kind());
            prop_assert_eq!(got, oracle.apply(op));
            assert_invariants(&array);
        }
        assert_matches(&array, &oracle);
    }
}
