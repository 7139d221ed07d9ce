//! Binary heap operations on slices.
//!
//! A slice is a heap when no element orders after its parent, so the first element is always the
//! greatest. The parent of the element at index `i` sits at `(i - 1) / 2`, its children at `2i + 1`
//! and `2i + 2`.

use std::cmp::Ordering;

/// Moves the last element of `slice` into heap position, assuming that all elements before it
/// already form a heap.
///
/// # Time Complexity
/// `O(log n)`
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::{is_heap, push_heap};
/// # use containers_lib::vector;
/// let mut heap = vector![9, 5, 4];
/// heap.push(7);
/// push_heap(&mut heap);
/// assert_eq!(heap[0], 9);
/// assert!(is_heap(&heap));
/// ```
pub fn push_heap<T: Ord>(slice: &mut [T]) {
    push_heap_by(slice, T::cmp);
}

/// Moves the last element of `slice` into heap position according to `compare`. See
/// [`push_heap`].
pub fn push_heap_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if slice.len() < 2 {
        return;
    }

    let mut index = slice.len() - 1;
    while index > 0 {
        let parent = (index - 1) / 2;
        if compare(&slice[parent], &slice[index]) != Ordering::Less {
            break;
        }
        slice.swap(parent, index);
        index = parent;
    }
}

/// Moves the greatest element of the heap to the end of `slice` and restores the heap property
/// for the remaining elements.
///
/// # Time Complexity
/// `O(log n)`
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::{make_heap, pop_heap};
/// let mut values = [3, 8, 1, 6];
/// make_heap(&mut values);
/// pop_heap(&mut values);
/// assert_eq!(values[3], 8);
/// assert_eq!(values[0], 6);
/// ```
pub fn pop_heap<T: Ord>(slice: &mut [T]) {
    pop_heap_by(slice, T::cmp);
}

/// Moves the greatest element according to `compare` to the end of `slice`. See [`pop_heap`].
pub fn pop_heap_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = slice.len();
    if len < 2 {
        return;
    }

    slice.swap(0, len - 1);
    sift_down(&mut slice[..len - 1], 0, &mut compare);
}

/// Rearranges `slice` into a heap.
///
/// # Time Complexity
/// `O(n)`
pub fn make_heap<T: Ord>(slice: &mut [T]) {
    make_heap_by(slice, T::cmp);
}

/// Rearranges `slice` into a heap according to `compare`.
pub fn make_heap_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for index in (0..slice.len() / 2).rev() {
        sift_down(slice, index, &mut compare);
    }
}

/// Turns a heap into a slice sorted in ascending order.
///
/// # Time Complexity
/// `O(n log n)`
pub fn sort_heap<T: Ord>(slice: &mut [T]) {
    sort_heap_by(slice, T::cmp);
}

/// Turns a heap built with `compare` into a slice sorted in ascending order by `compare`.
pub fn sort_heap_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for end in (1..slice.len()).rev() {
        slice.swap(0, end);
        sift_down(&mut slice[..end], 0, &mut compare);
    }
}

/// Returns true if `slice` is a heap.
pub fn is_heap<T: Ord>(slice: &[T]) -> bool {
    is_heap_by(slice, T::cmp)
}

/// Returns true if `slice` is a heap according to `compare`.
pub fn is_heap_by<T, F>(slice: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    (1..slice.len()).all(|index| {
        let parent = (index - 1) / 2;
        compare(&slice[parent], &slice[index]) != Ordering::Less
    })
}

/// Moves the element at `index` down until neither of its children orders after it.
fn sift_down<T, F>(slice: &mut [T], mut index: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * index + 1;
        if left >= slice.len() {
            return;
        }

        let right = left + 1;
        let child = match slice.get(right) {
            Some(right_value) if compare(&slice[left], right_value) == Ordering::Less => right,
            _ => left,
        };

        if compare(&slice[index], &slice[child]) != Ordering::Less {
            return;
        }

        slice.swap(index, child);
        index = child;
    }
}
