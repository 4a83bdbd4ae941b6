//! Copying and clamped sub-range helpers.
//!
//! All positions are inclusive. Bounds outside the slice are clamped to it,
//! and a range that is empty after clamping gives an empty vector. Functions
//! that accept an `Option` map an absent input to an absent output.

/// Returns an independent copy of `values`, keeping `None` as `None`.
///
/// # Examples
///
/// ```
/// use parsort::slices::copy;
///
/// assert_eq!(copy(Some(&[1, 2][..])), Some(vec![1, 2]));
/// assert_eq!(copy::<u8>(None), None);
/// ```
pub fn copy<T: Clone>(values: Option<&[T]>) -> Option<Vec<T>> {
    values.map(<[T]>::to_vec)
}

/// Returns the values from `from` to `to`, both inclusive.
///
/// A negative `from` starts at the first value and a `to` beyond the end stops
/// at the last one. `from > to`, `from` past the end or a negative `to` give an
/// empty vector.
///
/// # Examples
///
/// ```
/// use parsort::slices::subslice;
///
/// let values = [1, 2, 3, 4, 5];
/// assert_eq!(subslice(&values, 1, 3), vec![2, 3, 4]);
/// assert_eq!(subslice(&values, -3, 1), vec![1, 2]);
/// assert_eq!(subslice(&values, 3, 99), vec![4, 5]);
/// assert!(subslice(&values, 5, 9).is_empty());
/// ```
pub fn subslice<T: Clone>(values: &[T], from: isize, to: isize) -> Vec<T> {
    match clamp_range(values.len(), from, to) {
        Some((from, to)) => values[from..=to].to_vec(),
        None => Vec::new(),
    }
}

/// Splits after position `n`: the first part holds `0..=n`, the second the rest.
///
/// A negative `n` puts everything into the second part, an `n` at or past the
/// last position everything into the first.
pub fn split<T: Clone>(n: isize, values: &[T]) -> (Vec<T>, Vec<T>) {
    let last = values.len() as isize - 1;
    (subslice(values, 0, n), subslice(values, n.saturating_add(1), last))
}

/// Returns the longest prefix whose values all satisfy `pred`.
pub fn take_while<T: Clone, P>(pred: P, values: &[T]) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    let taken = prefix_len(&pred, values);
    values[..taken].to_vec()
}

/// Returns what is left after dropping the longest prefix satisfying `pred`.
pub fn drop_while<T: Clone, P>(pred: P, values: &[T]) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    let dropped = prefix_len(&pred, values);
    values[dropped..].to_vec()
}

fn prefix_len<T, P>(pred: &P, values: &[T]) -> usize
where
    P: Fn(&T) -> bool,
{
    values.iter().take_while(|v| pred(v)).count()
}

/// Clamps inclusive `[from, to]` to a slice of length `len`.
fn clamp_range(len: usize, from: isize, to: isize) -> Option<(usize, usize)> {
    if len == 0 || from > to || to < 0 {
        return None;
    }
    let from = from.max(0) as usize;
    if from >= len {
        return None;
    }
    let to = (to as usize).min(len - 1);
    Some((from, to))
}
