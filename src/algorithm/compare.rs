//! Element-wise comparison of two ranges.

use std::cmp::Ordering;

use crate::collections::iter::{ForwardIter, InputIter};

/// Returns true if every element of `first` is equal to the element at the same position in
/// `second`.
///
/// Only the length of `first` is considered: extra elements in `second` are ignored, but
/// `second` running out early makes the ranges unequal.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::equal;
/// # use containers_lib::vector;
/// let vec = vector![1, 2, 3];
/// assert!(equal(vec.iter(), [1, 2, 3, 4].iter()));
/// assert!(!equal(vec.iter(), [1, 2].iter()));
/// ```
pub fn equal<A, B>(first: A, second: B) -> bool
where
    A: InputIter,
    B: InputIter,
    A::Item: PartialEq<B::Item>,
{
    equal_by(first, second, |a, b| a == b)
}

/// Returns true if `predicate` holds for every element of `first` and the element at the same
/// position in `second`. See [`equal`].
pub fn equal_by<A, B, P>(first: A, second: B, predicate: P) -> bool
where
    A: InputIter,
    B: InputIter,
    P: FnMut(&A::Item, &B::Item) -> bool,
{
    mismatch_by(first, second, predicate).is_none()
}

/// Returns the index of the first position at which `first` and `second` differ, or [`None`] if
/// every element of `first` is matched. As with [`equal`], `second` running out early counts as
/// a difference.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::mismatch;
/// assert_eq!(mismatch("abcd".chars(), "abxd".chars()), Some(2));
/// assert_eq!(mismatch("ab".chars(), "abc".chars()), None);
/// assert_eq!(mismatch("abc".chars(), "ab".chars()), Some(2));
/// ```
pub fn mismatch<A, B>(first: A, second: B) -> Option<usize>
where
    A: InputIter,
    B: InputIter,
    A::Item: PartialEq<B::Item>,
{
    mismatch_by(first, second, |a, b| a == b)
}

/// Returns the index of the first position at which `predicate` doesn't hold. See [`mismatch`].
pub fn mismatch_by<A, B, P>(first: A, second: B, mut predicate: P) -> Option<usize>
where
    A: InputIter,
    B: InputIter,
    P: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut second = second;
    for (index, a) in first.enumerate() {
        match second.next() {
            Some(b) if predicate(&a, &b) => {},
            _ => return Some(index),
        }
    }
    None
}

/// Returns true if `first` orders strictly before `second`, comparing element by element. A
/// proper prefix orders before the longer range.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::lexicographical_compare;
/// assert!(lexicographical_compare("abc".chars(), "abd".chars()));
/// assert!(lexicographical_compare("ab".chars(), "abc".chars()));
/// assert!(!lexicographical_compare("abc".chars(), "abc".chars()));
/// ```
pub fn lexicographical_compare<A, B>(first: A, second: B) -> bool
where
    A: InputIter,
    B: InputIter<Item = A::Item>,
    A::Item: Ord,
{
    lexicographical_compare_by(first, second, Ord::cmp)
}

/// Returns true if `first` orders strictly before `second` according to `compare`. See
/// [`lexicographical_compare`].
pub fn lexicographical_compare_by<A, B, F>(first: A, second: B, mut compare: F) -> bool
where
    A: InputIter,
    B: InputIter,
    F: FnMut(&A::Item, &B::Item) -> Ordering,
{
    let mut second = second;
    for a in first {
        let Some(b) = second.next() else {
            return false;
        };

        match compare(&a, &b) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {},
        }
    }
    second.next().is_some()
}

/// Returns true if `second` holds the same elements as `first`, in any order. Both ranges have to
/// be traversed repeatedly, so both must be at least [`Forward`](crate::collections::iter::Forward)
/// iterators.
///
/// # Time Complexity
/// `O(n²)` comparisons, after skipping any common prefix in `O(n)`.
///
/// # Examples
/// ```
/// # use containers_lib::algorithm::is_permutation;
/// assert!(is_permutation([1, 2, 2, 3].iter(), [2, 3, 1, 2].iter()));
/// assert!(!is_permutation([1, 2, 2].iter(), [1, 1, 2].iter()));
/// assert!(!is_permutation([1, 2].iter(), [1, 2, 3].iter()));
/// ```
pub fn is_permutation<A, B>(first: A, second: B) -> bool
where
    A: ForwardIter,
    B: ForwardIter<Item = A::Item>,
    A::Item: PartialEq,
{
    is_permutation_by(first, second, |a, b| a == b)
}

/// Returns true if `second` is a permutation of `first` under the equivalence `predicate`. See
/// [`is_permutation`].
pub fn is_permutation_by<A, B, P>(first: A, second: B, mut predicate: P) -> bool
where
    A: ForwardIter,
    B: ForwardIter<Item = A::Item>,
    P: FnMut(&A::Item, &A::Item) -> bool,
{
    let mut first = first;
    let mut second = second;

    // Skip the common prefix, which is trivially a permutation of itself.
    loop {
        let (first_pos, second_pos) = (first.clone(), second.clone());
        match (first.next(), second.next()) {
            (Some(a), Some(b)) if predicate(&a, &b) => {},
            (None, None) => return true,
            _ => {
                first = first_pos;
                second = second_pos;
                break;
            },
        }
    }

    if first.clone().count() != second.clone().count() {
        return false;
    }

    let mut scan = first.clone();
    let mut scanned = 0;
    while let Some(value) = scan.next() {
        // Every value is only counted at its first occurrence.
        let seen_before = first.clone().take(scanned).any(|earlier| predicate(&earlier, &value));
        scanned += 1;
        if seen_before {
            continue;
        }

        let matches = second.clone().filter(|other| predicate(&value, other)).count();
        let occurrences = 1 + scan.clone().filter(|later| predicate(&value, later)).count();
        if occurrences != matches {
            return false;
        }
    }

    true
}
