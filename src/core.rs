//! Core traits and configuration for parsort.
//!
//! This module defines:
//! - [`IndexLess`]: The comparator trait the engine sorts with.
//! - [`Natural`]: The comparator used for `Ord` element types.
//! - [`Thresholds`]: The two size cutoffs that pick a strategy per range.
//! - [`ThresholdError`]: Rejection of an inconsistent threshold pair.

use cuneiform::cuneiform;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::sync::OnceLock;

/// Multiplier applied to the CPU count for the insertion-sort cutoff.
pub const SEQUENTIAL_FACTOR: usize = 4;

/// Multiplier applied to the CPU count for the fork/join cutoff.
pub const PARALLEL_FACTOR: usize = 2048;

/// A strict weak ordering expressed over two positions of a slice.
///
/// The comparator sees the whole slice it is working on, not just the two
/// values, so keys can be derived from several fields or from neighbouring
/// data. `less(values, i, j)` returns `true` if the element at `i` must be
/// placed before the element at `j`.
///
/// Indices are always valid for `values`, but they are relative to the slice
/// handed in, which during a sort is a sub-range of the working copy.
///
/// Any closure of the shape `Fn(&[T], usize, usize) -> bool` implements this
/// trait.
///
/// # Examples
///
/// ```
/// use parsort::core::IndexLess;
///
/// struct ByLen;
///
/// impl IndexLess<&str> for ByLen {
///     fn less(&self, values: &[&str], i: usize, j: usize) -> bool {
///         values[i].len() < values[j].len()
///     }
/// }
///
/// assert!(ByLen.less(&["pi", "alpha"], 0, 1));
/// ```
pub trait IndexLess<T> {
    /// Returns `true` if `values[i]` sorts before `values[j]`.
    fn less(&self, values: &[T], i: usize, j: usize) -> bool;
}

impl<T, F> IndexLess<T> for F
where
    F: Fn(&[T], usize, usize) -> bool,
{
    #[inline(always)]
    fn less(&self, values: &[T], i: usize, j: usize) -> bool {
        self(values, i, j)
    }
}

/// Ascending order according to `Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> IndexLess<T> for Natural {
    #[inline(always)]
    fn less(&self, values: &[T], i: usize, j: usize) -> bool {
        values[i] < values[j]
    }
}

/// Size cutoffs steering the recursive driver.
///
/// Both values are compared against the *span* of a range, i.e. `hi - lo`
/// for the inclusive bounds `[lo, hi]`, which is one less than its length.
///
/// - spans up to `sequential` are finished with insertion sort,
/// - spans up to `parallel` are partitioned and recursed on the current thread,
/// - larger spans are partitioned and both halves are forked.
///
/// Every worker reads the thresholds on every recursion step, so the struct
/// lives on its own cache line.
#[cuneiform]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    sequential: usize,
    parallel: usize,
}

impl Thresholds {
    /// Creates a threshold pair, requiring `parallel > sequential`.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsort::core::{ThresholdError, Thresholds};
    ///
    /// let thresholds = Thresholds::new(7, 63).unwrap();
    /// assert_eq!(thresholds.sequential(), 7);
    ///
    /// assert_eq!(
    ///     Thresholds::new(63, 7),
    ///     Err(ThresholdError::NotOrdered { sequential: 63, parallel: 7 })
    /// );
    /// ```
    pub fn new(sequential: usize, parallel: usize) -> Result<Self, ThresholdError> {
        if parallel <= sequential {
            return Err(ThresholdError::NotOrdered {
                sequential,
                parallel,
            });
        }
        Ok(Self {
            sequential,
            parallel,
        })
    }

    /// Derives the thresholds from a number of parallel execution units.
    ///
    /// `sequential = 4 * units - 1`, `parallel = 2048 * units - 1`. A unit
    /// count of zero is treated as one.
    pub fn from_parallelism(units: usize) -> Self {
        let units = units.max(1);
        Self {
            sequential: units.saturating_mul(SEQUENTIAL_FACTOR) - 1,
            parallel: units.saturating_mul(PARALLEL_FACTOR) - 1,
        }
    }

    /// Derives the thresholds from the parallelism available to this process.
    ///
    /// The hardware query runs once per process; later calls reuse its answer.
    pub fn detect() -> Self {
        Self::from_parallelism(available_units())
    }

    /// Span at or below which a range is insertion sorted.
    pub fn sequential(&self) -> usize {
        self.sequential
    }

    /// Span at or below which a range is no longer forked.
    pub fn parallel(&self) -> usize {
        self.parallel
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::detect()
    }
}

fn available_units() -> usize {
    static UNITS: OnceLock<usize> = OnceLock::new();
    *UNITS.get_or_init(|| {
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    })
}

/// Error returned when building an inconsistent [`Thresholds`] pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    /// The fork cutoff must be strictly larger than the insertion-sort cutoff.
    NotOrdered {
        /// Requested insertion-sort cutoff.
        sequential: usize,
        /// Requested fork cutoff.
        parallel: usize,
    },
}

impl Display for ThresholdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdError::NotOrdered {
                sequential,
                parallel,
            } => write!(
                f,
                "parallel threshold {parallel} must be greater than sequential threshold {sequential}"
            ),
        }
    }
}

impl Error for ThresholdError {}
