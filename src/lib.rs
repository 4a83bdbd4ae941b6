//! # Parsort
//!
//! `parsort` is a hybrid comparison sort that returns sorted copies and splits
//! large inputs across threads with fork/join recursion.
//!
//! It is a quicksort built from three strategies, chosen per range by two
//! size [`Thresholds`]:
//!
//! - **Insertion Sort** for tiny ranges, where its low constant factor wins.
//! - **Sequential Quicksort** for medium ranges: Lomuto partition around a
//!   Tukey ninther pivot, then recursion on the current thread.
//! - **Fork/Join Quicksort** for large ranges: after partitioning, both halves
//!   are sorted concurrently on a [rayon](https://docs.rs/rayon) pool and
//!   joined before returning.
//!
//! ## Key Features
//!
//! - **Copy semantics**: Every sort works on a private copy. The input slice is
//!   only borrowed immutably and is never touched.
//! - **Positional comparators**: A comparator receives the slice and two
//!   indices (see [`IndexLess`]), so keys may be derived from anything
//!   reachable through the element.
//! - **Explicit configuration**: [`SortEngine`] holds its thresholds and an
//!   optional dedicated pool; the defaults derive from the machine's
//!   parallelism.
//! - **Panic safety**: A panicking comparator unwinds to the caller once all
//!   forked work has finished. Nothing is left running.
//!
//! The sort is not stable: equal elements may be reordered.
//!
//! ## Usage
//!
//! ```rust
//! use parsort::{is_sorted, sort};
//!
//! let data = vec![5, 7, 1, 3, 4, 2, 8, 6, 9];
//! let sorted = sort(&data);
//!
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert!(is_sorted(&sorted));
//! assert_eq!(data[0], 5); // untouched
//! ```
//!
//! ### Custom Order
//!
//! ```rust
//! use parsort::{is_sorted_with, sort_with};
//!
//! #[derive(Clone)]
//! struct Event {
//!     day: u32,
//!     minute: u32,
//! }
//!
//! let events = vec![
//!     Event { day: 2, minute: 10 },
//!     Event { day: 1, minute: 50 },
//!     Event { day: 1, minute: 5 },
//! ];
//!
//! let sorted = sort_with(&events, |vs, i, j| {
//!     (vs[i].day, vs[i].minute) < (vs[j].day, vs[j].minute)
//! });
//!
//! assert!(is_sorted_with(&sorted, |a, b| (a.day, a.minute) < (b.day, b.minute)));
//! assert_eq!(sorted[0].minute, 5);
//! ```
//!
//! ### Fixed Thresholds
//!
//! ```rust
//! use parsort::{SortEngine, Thresholds};
//!
//! let engine = SortEngine::new(Thresholds::new(15, 4095).unwrap());
//! let sorted = engine.sort(&[3u8, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Average Case**: O(N log N) comparisons, spread over the pool above the
//!   parallel threshold.
//! - **Worst Case**: O(N²) for adversarial inputs and for many equal keys,
//!   since the Lomuto partition sends every element equal to the pivot right.
//! - **Memory Overhead**: One copy of the input; O(log N) stack on sequential
//!   paths.

mod algo;
pub mod core;
pub mod engine;
pub mod slices;

pub use crate::core::{IndexLess, Natural, ThresholdError, Thresholds};
pub use engine::{
    SortEngine, is_sorted, is_sorted_with, sort, sort_option, sort_with, sort_with_option,
};

pub mod prelude {
    pub use crate::core::{IndexLess, Natural, ThresholdError, Thresholds};
    pub use crate::engine::{
        SortEngine, is_sorted, is_sorted_with, sort, sort_option, sort_with, sort_with_option,
    };
}
