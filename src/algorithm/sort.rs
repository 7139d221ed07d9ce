//! Simple comparison sorts on slices.
//!
//! | Function | Comparisons | Stable |
//! |-|-|-|
//! | [`selection_sort`] | `O(n²)` | No |
//! | [`bubble_sort`] | `O(n²)`, `O(n)` if already sorted | Yes |
//! | [`insertion_sort`] | `O(n²)`, `O(n)` if already sorted | Yes |
//! | [`heap_sort`] | `O(n log n)` | No |

use std::cmp::Ordering;

use super::{make_heap_by, sort_heap_by};

/// Sorts `slice` in ascending order by repeatedly selecting the smallest remaining element.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::selection_sort;
/// let mut values = [5, 4, 3, 2, 1];
/// selection_sort(&mut values);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub fn selection_sort<T: Ord>(slice: &mut [T]) {
    selection_sort_by(slice, T::cmp);
}

/// Sorts `slice` in ascending order according to `compare` by repeatedly selecting the smallest
/// remaining element. At most one swap happens per position.
pub fn selection_sort_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for sorted in 0..slice.len() {
        let mut min = sorted;
        for candidate in sorted + 1..slice.len() {
            if compare(&slice[candidate], &slice[min]) == Ordering::Less {
                min = candidate;
            }
        }

        if min != sorted {
            slice.swap(sorted, min);
        }
    }
}

/// Sorts `slice` in ascending order by swapping adjacent elements that are out of order.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::bubble_sort;
/// let mut values = ['d', 'a', 'c', 'b'];
/// bubble_sort(&mut values);
/// assert_eq!(values, ['a', 'b', 'c', 'd']);
/// ```
pub fn bubble_sort<T: Ord>(slice: &mut [T]) {
    bubble_sort_by(slice, T::cmp);
}

/// Sorts `slice` in ascending order according to `compare` by swapping adjacent elements that are
/// out of order. Stops early once a pass makes no swaps.
pub fn bubble_sort_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut end = slice.len();
    while end > 1 {
        let mut last_swap = 0;
        for next in 1..end {
            if compare(&slice[next], &slice[next - 1]) == Ordering::Less {
                slice.swap(next, next - 1);
                last_swap = next;
            }
        }
        // Everything from the last swap onwards is already in place.
        end = last_swap;
    }
}

/// Sorts `slice` in ascending order by inserting each element into the sorted prefix before it.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::insertion_sort;
/// let mut values = [2, 3, 1];
/// insertion_sort(&mut values);
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    insertion_sort_by(slice, T::cmp);
}

/// Sorts `slice` in ascending order according to `compare` by inserting each element into the
/// sorted prefix before it.
pub fn insertion_sort_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for unsorted in 1..slice.len() {
        let mut index = unsorted;
        while index > 0 && compare(&slice[index], &slice[index - 1]) == Ordering::Less {
            slice.swap(index, index - 1);
            index -= 1;
        }
    }
}

/// Sorts `slice` in ascending order by building a heap and repeatedly popping its greatest element
/// to the end.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::heap_sort;
/// let mut values = [9, 1, 8, 2, 7, 3];
/// heap_sort(&mut values);
/// assert_eq!(values, [1, 2, 3, 7, 8, 9]);
/// ```
pub fn heap_sort<T: Ord>(slice: &mut [T]) {
    heap_sort_by(slice, T::cmp);
}

/// Sorts `slice` in ascending order according to `compare` using a heap.
pub fn heap_sort_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    make_heap_by(slice, &mut compare);
    sort_heap_by(slice, &mut compare);
}
