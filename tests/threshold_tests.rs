use parsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const SEQUENTIAL: usize = 7;
const PARALLEL: usize = 255;

fn engine() -> SortEngine {
    SortEngine::new(Thresholds::new(SEQUENTIAL, PARALLEL).unwrap())
}

fn random_input(rng: &mut StdRng, len: usize) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(0..64)).collect()
}

fn boundary_lengths() -> Vec<usize> {
    // Thresholds bound the span, which is the length minus one.
    let mut lengths = vec![0, 1, 2];
    for span in [SEQUENTIAL, PARALLEL] {
        lengths.extend([span, span + 1, span + 2]);
    }
    lengths.extend([4 * PARALLEL, 40 * PARALLEL]);
    lengths
}

#[test]
fn test_threshold_boundaries() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(11);

    for len in boundary_lengths() {
        let input = random_input(&mut rng, len);
        let sorted = engine.sort(&input);

        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sorted, expected, "len {}", len);
    }
}

#[test]
fn test_threshold_boundaries_with_comparator() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(12);

    for len in boundary_lengths() {
        let input = random_input(&mut rng, len);
        let sorted = engine.sort_with(&input, |vs, i, j| vs[i] > vs[j]);

        assert_eq!(sorted.len(), input.len());
        assert!(is_sorted_with(&sorted, |a, b| a > b), "len {}", len);
    }
}

#[test]
fn test_minimal_thresholds() {
    // Every range of two or more elements is partitioned, and forked above two.
    let engine = SortEngine::new(Thresholds::new(0, 1).unwrap());
    let mut rng = StdRng::seed_from_u64(13);
    let input = random_input(&mut rng, 5_000);

    let mut expected = input.clone();
    expected.sort();
    assert_eq!(engine.sort(&input), expected);
}

#[test]
fn test_insertion_only() {
    let engine = SortEngine::new(Thresholds::new(usize::MAX - 1, usize::MAX).unwrap());
    let input: Vec<i32> = (0..500).rev().collect();
    let expected: Vec<i32> = (0..500).collect();
    assert_eq!(engine.sort(&input), expected);
}

#[test]
fn test_dedicated_thread_pool() {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(2)
        .build()
        .unwrap();
    let engine = engine().with_thread_pool(Arc::new(pool));
    assert_eq!(engine.thresholds().parallel(), PARALLEL);

    let mut rng = StdRng::seed_from_u64(14);
    let input = random_input(&mut rng, 50_000);

    let mut expected = input.clone();
    expected.sort();
    assert_eq!(engine.sort(&input), expected);
    assert_eq!(engine.sort_option(None::<&[u32]>), None);
}

#[test]
fn test_invalid_thresholds_rejected() {
    let err = Thresholds::new(PARALLEL, SEQUENTIAL).unwrap_err();
    assert_eq!(
        err,
        ThresholdError::NotOrdered {
            sequential: PARALLEL,
            parallel: SEQUENTIAL
        }
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("must be greater"));
}

#[test]
fn test_default_engine_uses_detected_thresholds() {
    let engine = SortEngine::default();
    assert_eq!(*engine.thresholds(), Thresholds::detect());
    assert_eq!(
        engine.thresholds().sequential() + 1,
        (engine.thresholds().parallel() + 1) / 512
    );
}
