use parsort::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

fn small_engine() -> SortEngine {
    SortEngine::new(Thresholds::new(3, 63).unwrap())
}

#[test]
fn test_comparator_panic_propagates_from_forked_sort() {
    let input: Vec<u32> = (0..20_000).rev().collect();
    let calls = AtomicUsize::new(0);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        small_engine().sort_with(&input, |vs, i, j| {
            if calls.fetch_add(1, Ordering::Relaxed) == 50_000 {
                panic!("comparator failure");
            }
            vs[i] < vs[j]
        })
    }));

    let err = result.unwrap_err();
    let message = err
        .downcast_ref::<&str>()
        .copied()
        .unwrap_or_default();
    assert_eq!(message, "comparator failure");

    // The caller's data is never part of the sort.
    assert_eq!(input, (0..20_000).rev().collect::<Vec<u32>>());
}

#[test]
fn test_comparator_panic_propagates_from_sequential_sort() {
    let input = vec![3, 1, 2];
    let result = panic::catch_unwind(|| sort_with(&input, |_: &[i32], _, _| panic!("boom")));
    assert!(result.is_err());
    assert_eq!(input, vec![3, 1, 2]);
}

#[test]
fn test_engine_usable_after_panic() {
    let engine = small_engine();
    let input: Vec<u32> = (0..5_000).rev().collect();

    let failed = panic::catch_unwind(AssertUnwindSafe(|| {
        engine.sort_with(&input, |vs, i, j| {
            assert!(vs[i] != 2_500 && vs[j] != 2_500, "poisoned value");
            vs[i] < vs[j]
        })
    }));
    assert!(failed.is_err());

    let sorted = engine.sort(&input);
    assert_eq!(sorted, (0..5_000).collect::<Vec<u32>>());
}

#[test]
fn test_inconsistent_comparator_keeps_elements() {
    // Not a strict weak ordering: the result order is unspecified but no
    // element may be lost or duplicated.
    let input: Vec<u32> = (0..3_000).collect();
    let sorted = small_engine().sort_with(&input, |vs, i, j| (vs[i] ^ vs[j]) & 1 == 1);

    let mut elements = sorted.clone();
    elements.sort();
    assert_eq!(elements, input);
}
