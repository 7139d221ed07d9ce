//! Copying, removing and deduplicating elements.
//!
//! The in-place variants ([`remove`], [`remove_if`], [`unique`] and [`unique_by`]) never change the
//! length of the slice they operate on. They move the retained elements to the front, in their
//! original order, and return how many there are. The caller decides what to do with the tail,
//! usually by truncating the owning collection:
//!
//! ```
//! # use containers_lib::algorithm::remove;
//! # use containers_lib::vector;
//! let mut vec = vector![1, 2, 3, 2, 4];
//! let len = remove(&mut vec, &2);
//! vec.truncate(len);
//! assert_eq!(vec, [1, 3, 4]);
//! ```
//!
//! The `_copy` variants read from an input range and write into any [`Extend`] sink instead.

use std::borrow::Borrow;

use crate::collections::iter::InputIter;

/// Appends every element of `iter` to `sink`, returning the number of elements written.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::copy;
/// # use containers_lib::collections::contiguous::Vector;
/// let mut sink = Vector::new();
/// assert_eq!(copy("abc".chars(), &mut sink), 3);
/// assert_eq!(sink, ['a', 'b', 'c']);
/// ```
pub fn copy<I, E>(iter: I, sink: &mut E) -> usize
where
    I: InputIter,
    E: Extend<I::Item>,
{
    remove_copy_if(iter, sink, |_| false)
}

/// Moves every element not equal to `value` to the front of `slice`, preserving their order, and
/// returns their count.
pub fn remove<T, V>(slice: &mut [T], value: &V) -> usize
where
    T: Borrow<V>,
    V: PartialEq + ?Sized,
{
    remove_if(slice, |item| item.borrow() == value)
}

/// Moves every element that doesn't satisfy `predicate` to the front of `slice`, preserving their
/// order, and returns their count.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::remove_if;
/// let mut values = [1, 2, 3, 4, 5, 6];
/// let len = remove_if(&mut values, |v| v % 2 == 0);
/// assert_eq!(&values[..len], &[1, 3, 5]);
/// ```
pub fn remove_if<T, P>(slice: &mut [T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut kept = 0;
    for read in 0..slice.len() {
        if !predicate(&slice[read]) {
            slice.swap(kept, read);
            kept += 1;
        }
    }
    kept
}

/// Appends every element of `iter` that isn't equal to `value` to `sink`, returning the number of
/// elements written.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::remove_copy;
/// let mut sink = String::new();
/// assert_eq!(remove_copy("banana".chars(), &mut sink, &'a'), 3);
/// assert_eq!(sink, "bnn");
/// ```
pub fn remove_copy<I, E, V>(iter: I, sink: &mut E, value: &V) -> usize
where
    I: InputIter,
    I::Item: Borrow<V>,
    E: Extend<I::Item>,
    V: PartialEq + ?Sized,
{
    remove_copy_if(iter, sink, |item| item.borrow() == value)
}

/// Appends every element of `iter` that doesn't satisfy `predicate` to `sink`, returning the
/// number of elements written.
pub fn remove_copy_if<I, E, P>(iter: I, sink: &mut E, mut predicate: P) -> usize
where
    I: InputIter,
    E: Extend<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    let mut written = 0;
    sink.extend(iter.filter(|item| !predicate(item)).inspect(|_| written += 1));
    written
}

/// Collapses every run of adjacent equal elements in `slice` into its first element, moving the
/// survivors to the front, and returns their count.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::unique;
/// let mut values = [1, 1, 2, 2, 2, 1, 3];
/// let len = unique(&mut values);
/// assert_eq!(&values[..len], &[1, 2, 1, 3]);
/// ```
pub fn unique<T: PartialEq>(slice: &mut [T]) -> usize {
    unique_by(slice, |a, b| a == b)
}

/// Collapses every run of adjacent elements for which `same` holds into its first element. Each
/// element is compared against the last retained one. See [`unique`].
pub fn unique_by<T, P>(slice: &mut [T], mut same: P) -> usize
where
    P: FnMut(&T, &T) -> bool,
{
    if slice.is_empty() {
        return 0;
    }

    let mut last = 0;
    for read in 1..slice.len() {
        if !same(&slice[last], &slice[read]) {
            last += 1;
            slice.swap(last, read);
        }
    }
    last + 1
}

/// Appends the elements of `iter` to `sink`, skipping any element equal to the one written before
/// it. Returns the number of elements written.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::unique_copy;
/// # use containers_lib::collections::contiguous::Vector;
/// let mut sink = Vector::new();
/// assert_eq!(unique_copy([1, 1, 2, 1, 1].into_iter(), &mut sink), 3);
/// assert_eq!(sink, [1, 2, 1]);
/// ```
pub fn unique_copy<I, E>(iter: I, sink: &mut E) -> usize
where
    I: InputIter,
    I::Item: PartialEq + Clone,
    E: Extend<I::Item>,
{
    unique_copy_by(iter, sink, |a, b| a == b)
}

/// Appends the elements of `iter` to `sink`, skipping any element for which `same` holds together
/// with the last written one. See [`unique_copy`].
pub fn unique_copy_by<I, E, P>(iter: I, sink: &mut E, mut same: P) -> usize
where
    I: InputIter,
    I::Item: Clone,
    E: Extend<I::Item>,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut last: Option<I::Item> = None;
    let mut written = 0;

    sink.extend(iter.filter_map(|item| {
        if last.as_ref().is_some_and(|last| same(last, &item)) {
            return None;
        }

        last = Some(item.clone());
        written += 1;
        Some(item)
    }));

    written
}
