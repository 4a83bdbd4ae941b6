//! Core sorting algorithms (ninther quicksort with fork/join recursion).
//!
//! The engine is a hybrid of:
//! - **Quicksort** with a Lomuto partition around a ninther pivot.
//! - **Fork/join recursion**: both halves of a large partition are sorted concurrently.
//! - **Insertion Sort**: Fallback for small partitions.
//!
//! Every range is a disjoint `&mut [T]` view into one owned working buffer, so
//! the inclusive bounds of the current range are always `[0, len - 1]`.
//! Which strategy a range gets is decided by [`Thresholds`].

use crate::core::{IndexLess, Thresholds};
use log::trace;

/// Ranges wider than this use the ninther instead of a plain median of three.
const NINTHER_THRESHOLD: usize = 40;

/// Sorts `v` in place, forking above the parallel threshold.
///
/// Returns once the whole recursion tree has completed. A panic raised by the
/// comparator in a forked task is resumed here after its sibling has finished.
///
/// Sequential recursion descends into the shorter side and loops on the longer
/// one, which keeps the stack logarithmic even for degenerate splits.
pub(crate) fn quicksort<T, C>(mut v: &mut [T], less: &C, thresholds: &Thresholds)
where
    T: Send,
    C: IndexLess<T> + Sync + ?Sized,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }
        let span = len - 1;

        if span <= thresholds.sequential() {
            insertion_sort(v, less);
            return;
        }

        let pivot = partition(v, less);
        let (left, rest) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut rest[1..];

        if span <= thresholds.parallel() {
            if left.len() < right.len() {
                quicksort(left, less, thresholds);
                v = right;
            } else {
                quicksort(right, less, thresholds);
                v = left;
            }
        } else if left.is_empty() {
            v = right;
        } else if right.is_empty() {
            v = left;
        } else {
            trace!(
                "forking span {} into {} + {} elements",
                span,
                left.len(),
                right.len()
            );
            rayon::join(
                || quicksort(left, less, thresholds),
                || quicksort(right, less, thresholds),
            );
            return;
        }
    }
}

/// Classic insertion sort by adjacent swaps.
pub(crate) fn insertion_sort<T, C>(v: &mut [T], less: &C)
where
    C: IndexLess<T> + ?Sized,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && less.less(v, j, j - 1) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Orders the three positions so that `mm` holds their median.
///
/// At most three conditional swaps.
#[inline(always)]
fn median_into_middle<T, C>(v: &mut [T], less: &C, ml: usize, mm: usize, mh: usize)
where
    C: IndexLess<T> + ?Sized,
{
    if less.less(v, mm, ml) {
        v.swap(mm, ml);
    }
    if less.less(v, mh, mm) {
        v.swap(mh, mm);
    }
    if less.less(v, mm, ml) {
        v.swap(mm, ml);
    }
}

/// Picks the pivot position for `v`, moving sample medians into place.
///
/// For wide ranges the medians of three stride-`d` samples around the low
/// end, the middle and the high end are first moved onto `lo`, `mid` and
/// `hi`, so the final median of `(lo, mid, hi)` is Tukey's ninther.
/// Always returns the middle index.
pub(crate) fn choose_pivot<T, C>(v: &mut [T], less: &C) -> usize
where
    C: IndexLess<T> + ?Sized,
{
    debug_assert!(!v.is_empty());
    let lo = 0;
    let hi = v.len() - 1;
    let mid = (lo + hi) / 2;
    let d = (hi - lo) / 8;

    if hi - lo > NINTHER_THRESHOLD {
        median_into_middle(v, less, lo + d, lo, lo + 2 * d);
        median_into_middle(v, less, mid - d, mid, mid + d);
        median_into_middle(v, less, hi - d, hi, hi - 2 * d);
    }
    median_into_middle(v, less, lo, mid, hi);
    mid
}

/// Partitions `v` around a chosen pivot and returns the pivot's final index.
///
/// Afterwards `v[..pivot]` holds the elements that compared less than the
/// pivot and `v[pivot + 1..]` the rest. The pivot slot belongs to neither side.
pub(crate) fn partition<T, C>(v: &mut [T], less: &C) -> usize
where
    C: IndexLess<T> + ?Sized,
{
    let hi = v.len() - 1;
    let med = choose_pivot(v, less);
    v.swap(med, hi);

    let mut slot = 0;
    for i in 0..hi {
        if less.less(v, i, hi) {
            v.swap(i, slot);
            slot += 1;
        }
    }
    v.swap(slot, hi);
    slot
}
