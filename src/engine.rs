//! Public sorting entry points.
//!
//! [`SortEngine`] owns the configuration of a sort: the [`Thresholds`] and,
//! optionally, a dedicated rayon pool. The free functions [`sort`],
//! [`sort_with`] and friends run on [`SortEngine::default`], i.e. thresholds
//! derived from the machine's parallelism and rayon's global pool.
//!
//! Every sort returns a new vector. The input slice is only read.

use crate::algo::quicksort;
use crate::core::{IndexLess, Natural, Thresholds};
use log::debug;
use rayon::ThreadPool;
use std::sync::Arc;

/// A configured sorter.
///
/// # Examples
///
/// ```
/// use parsort::{SortEngine, Thresholds};
///
/// let engine = SortEngine::new(Thresholds::new(3, 63).unwrap());
/// assert_eq!(engine.sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SortEngine {
    thresholds: Thresholds,
    pool: Option<Arc<ThreadPool>>,
}

impl SortEngine {
    /// Creates an engine running on rayon's global pool.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            pool: None,
        }
    }

    /// Runs every sort of this engine inside `pool`.
    pub fn with_thread_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// The thresholds this engine sorts with.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Returns an ascending sorted copy of `values`.
    ///
    /// The sort is not stable.
    pub fn sort<T: Ord + Clone + Send>(&self, values: &[T]) -> Vec<T> {
        self.sort_by_index_less(values, &Natural)
    }

    /// Returns a copy of `values` sorted by `less`.
    ///
    /// `less(values, i, j)` must return `true` if the element at `i` has to be
    /// placed before the one at `j`. See [`IndexLess`] for the contract.
    pub fn sort_with<T, F>(&self, values: &[T], less: F) -> Vec<T>
    where
        T: Clone + Send,
        F: Fn(&[T], usize, usize) -> bool + Sync,
    {
        self.sort_by_index_less(values, &less)
    }

    /// Returns a copy of `values` sorted by an [`IndexLess`] implementation.
    pub fn sort_by_index_less<T, C>(&self, values: &[T], less: &C) -> Vec<T>
    where
        T: Clone + Send,
        C: IndexLess<T> + Sync + ?Sized,
    {
        let mut work = values.to_vec();
        self.sort_in_place(&mut work, less);
        work
    }

    /// Like [`SortEngine::sort`], but an absent input gives an absent result.
    pub fn sort_option<T: Ord + Clone + Send>(&self, values: Option<&[T]>) -> Option<Vec<T>> {
        values.map(|values| self.sort(values))
    }

    /// Like [`SortEngine::sort_with`], but an absent input gives an absent result.
    pub fn sort_with_option<T, F>(&self, values: Option<&[T]>, less: F) -> Option<Vec<T>>
    where
        T: Clone + Send,
        F: Fn(&[T], usize, usize) -> bool + Sync,
    {
        values.map(|values| self.sort_by_index_less(values, &less))
    }

    fn sort_in_place<T, C>(&self, work: &mut [T], less: &C)
    where
        T: Send,
        C: IndexLess<T> + Sync + ?Sized,
    {
        if work.len() < 2 {
            return;
        }
        debug!(
            "sorting {} elements (sequential <= {}, parallel <= {})",
            work.len(),
            self.thresholds.sequential(),
            self.thresholds.parallel()
        );
        let thresholds = &self.thresholds;
        match &self.pool {
            Some(pool) => pool.install(|| quicksort(work, less, thresholds)),
            None => quicksort(work, less, thresholds),
        }
    }
}

/// Returns an ascending sorted copy of `values`.
///
/// # Examples
///
/// ```
/// use parsort::sort;
///
/// let values = vec![9, 5, 7, 3, 1, 3, 5, 4, 2, 8, 5, 6, 9];
/// assert_eq!(sort(&values), vec![1, 2, 3, 3, 4, 5, 5, 5, 6, 7, 8, 9, 9]);
/// ```
pub fn sort<T: Ord + Clone + Send>(values: &[T]) -> Vec<T> {
    SortEngine::default().sort(values)
}

/// Returns a copy of `values` sorted by the positional comparator `less`.
///
/// # Examples
///
/// ```
/// use parsort::sort_with;
///
/// let words = ["alpha", "beta", "phi", "epsilon", "lambda", "pi"];
/// let by_len = sort_with(&words, |vs, i, j| vs[i].len() < vs[j].len());
///
/// assert_eq!(by_len, ["pi", "phi", "beta", "alpha", "lambda", "epsilon"]);
/// ```
pub fn sort_with<T, F>(values: &[T], less: F) -> Vec<T>
where
    T: Clone + Send,
    F: Fn(&[T], usize, usize) -> bool + Sync,
{
    SortEngine::default().sort_with(values, less)
}

/// Like [`sort`], mapping `None` to `None`.
pub fn sort_option<T: Ord + Clone + Send>(values: Option<&[T]>) -> Option<Vec<T>> {
    SortEngine::default().sort_option(values)
}

/// Like [`sort_with`], mapping `None` to `None`.
pub fn sort_with_option<T, F>(values: Option<&[T]>, less: F) -> Option<Vec<T>>
where
    T: Clone + Send,
    F: Fn(&[T], usize, usize) -> bool + Sync,
{
    SortEngine::default().sort_with_option(values, less)
}

/// Returns `true` if `values` is in ascending order.
///
/// Empty and single element slices are sorted.
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    is_sorted_with(values, |a, b| a < b)
}

/// Returns `true` if no element compares `less` than its predecessor.
///
/// Scans from the back and stops at the first inversion.
pub fn is_sorted_with<T, F>(values: &[T], less: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    for i in (1..values.len()).rev() {
        if less(&values[i], &values[i - 1]) {
            return false;
        }
    }
    true
}
