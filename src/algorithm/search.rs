//! Linear searches and counting.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::collections::iter::{ForwardIter, InputIter};

/// Returns the first element equal to `value`, or [`None`] if there is no such element.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::find;
/// let values = [3, 1, 4, 1, 5];
/// assert_eq!(find(values.iter(), &4), Some(&4));
/// assert_eq!(find(0..10, &12), None);
/// ```
pub fn find<I, T>(iter: I, value: &T) -> Option<I::Item>
where
    I: InputIter,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    find_if(iter, |item| item.borrow() == value)
}

/// Returns the first element that satisfies `predicate`.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::find_if;
/// assert_eq!(find_if(1..10, |v| v % 4 == 0), Some(4));
/// ```
pub fn find_if<I, P>(iter: I, mut predicate: P) -> Option<I::Item>
where
    I: InputIter,
    P: FnMut(&I::Item) -> bool,
{
    for item in iter {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

/// Returns the first element that doesn't satisfy `predicate`.
pub fn find_if_not<I, P>(iter: I, mut predicate: P) -> Option<I::Item>
where
    I: InputIter,
    P: FnMut(&I::Item) -> bool,
{
    find_if(iter, |item| !predicate(item))
}

/// Returns the number of elements preceding the first element that satisfies `predicate`.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::position;
/// assert_eq!(position(['a', 'b', 'c'].iter(), |c| **c == 'c'), Some(2));
/// ```
pub fn position<I, P>(iter: I, mut predicate: P) -> Option<usize>
where
    I: InputIter,
    P: FnMut(&I::Item) -> bool,
{
    for (index, item) in iter.enumerate() {
        if predicate(&item) {
            return Some(index);
        }
    }
    None
}

/// Returns the number of elements equal to `value`.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::count;
/// assert_eq!(count("hello".chars(), &'l'), 2);
/// ```
pub fn count<I, T>(iter: I, value: &T) -> usize
where
    I: InputIter,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    count_if(iter, |item| item.borrow() == value)
}

/// Returns the number of elements that satisfy `predicate`.
pub fn count_if<I, P>(iter: I, mut predicate: P) -> usize
where
    I: InputIter,
    P: FnMut(&I::Item) -> bool,
{
    let mut total = 0;
    for item in iter {
        if predicate(&item) {
            total += 1;
        }
    }
    total
}

/// Returns `iter` advanced to the smallest element, so that the next call to
/// [`next`](Iterator::next) yields it. If several elements are equally small, the first is
/// chosen. An empty iterator is returned as is.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::min_element;
/// let values = [4, 2, 8, 2];
/// let mut pos = min_element(values.iter());
/// assert_eq!(pos.len(), 3, "The first minimum should be chosen.");
/// assert_eq!(pos.next(), Some(&2));
/// ```
pub fn min_element<I>(iter: I) -> I
where
    I: ForwardIter,
    I::Item: Ord,
{
    min_element_by(iter, Ord::cmp)
}

/// Returns `iter` advanced to the smallest element according to `compare`. See [`min_element`].
pub fn min_element_by<I, F>(iter: I, mut compare: F) -> I
where
    I: ForwardIter,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    select_position(iter, |candidate, best| compare(candidate, best) == Ordering::Less)
}

/// Returns `iter` advanced to the largest element. If several elements are equally large, the
/// first is chosen. An empty iterator is returned as is.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::max_element;
/// let mut pos = max_element("rust".chars());
/// assert_eq!(pos.next(), Some('u'));
/// assert_eq!(pos.as_str(), "st");
/// ```
pub fn max_element<I>(iter: I) -> I
where
    I: ForwardIter,
    I::Item: Ord,
{
    max_element_by(iter, Ord::cmp)
}

/// Returns `iter` advanced to the largest element according to `compare`. See [`max_element`].
pub fn max_element_by<I, F>(iter: I, mut compare: F) -> I
where
    I: ForwardIter,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    select_position(iter, |candidate, best| compare(candidate, best) == Ordering::Greater)
}

/// Finds the smallest and the largest element in a single scan, returning `iter` advanced to
/// each. The first of several minimums and the last of several maximums are chosen.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::minmax_element;
/// let values = [3, 9, 1, 9, 1];
/// let (min, max) = minmax_element(values.iter());
/// assert_eq!(min.len(), 3);
/// assert_eq!(max.len(), 2, "The last maximum should be chosen.");
/// ```
pub fn minmax_element<I>(iter: I) -> (I, I)
where
    I: ForwardIter,
    I::Item: Ord,
{
    minmax_element_by(iter, Ord::cmp)
}

/// Finds the smallest and the largest element according to `compare`. See [`minmax_element`].
pub fn minmax_element_by<I, F>(iter: I, mut compare: F) -> (I, I)
where
    I: ForwardIter,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut min_pos = iter.clone();
    let mut max_pos = iter.clone();
    let mut cursor = iter;

    loop {
        let here = cursor.clone();
        let Some(item) = cursor.next() else {
            break;
        };

        // Both positions only ever point at elements that have already been scanned, so reading
        // them again through a clone yields the current candidates.
        if let Some(min) = min_pos.clone().next() {
            if compare(&item, &min) == Ordering::Less {
                min_pos = here;
                continue;
            }
        }
        if let Some(max) = max_pos.clone().next() {
            if compare(&item, &max) != Ordering::Less {
                max_pos = here;
            }
        }
    }

    (min_pos, max_pos)
}

/// Returns `iter` advanced to the first of two adjacent equal elements, or exhausted if there is
/// no such pair.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::adjacent_find;
/// let values = [1, 2, 3, 3, 4];
/// let mut pos = adjacent_find(values.iter());
/// assert_eq!(pos.next(), Some(&3));
/// assert_eq!(pos.next(), Some(&3));
/// ```
pub fn adjacent_find<I>(iter: I) -> I
where
    I: ForwardIter,
    I::Item: PartialEq,
{
    adjacent_find_by(iter, |a, b| a == b)
}

/// Returns `iter` advanced to the first element that satisfies `predicate` together with its
/// successor. See [`adjacent_find`].
pub fn adjacent_find_by<I, P>(iter: I, mut predicate: P) -> I
where
    I: ForwardIter,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut previous_pos = iter.clone();
    let mut cursor = iter;

    let Some(mut previous) = cursor.next() else {
        return cursor;
    };

    loop {
        let here = cursor.clone();
        let Some(item) = cursor.next() else {
            return cursor;
        };

        if predicate(&previous, &item) {
            return previous_pos;
        }

        previous = item;
        previous_pos = here;
    }
}

/// Scans `iter`, replacing the current best whenever `replaces(candidate, best)` holds, and
/// returns the position of the final best.
fn select_position<I, F>(iter: I, mut replaces: F) -> I
where
    I: ForwardIter,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut best_pos = iter.clone();
    let mut cursor = iter;

    let Some(mut best) = cursor.next() else {
        return best_pos;
    };

    loop {
        let here = cursor.clone();
        let Some(item) = cursor.next() else {
            return best_pos;
        };

        if replaces(&item, &best) {
            best = item;
            best_pos = here;
        }
    }
}
