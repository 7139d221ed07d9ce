//! Generic algorithms over iterators and slices.
//!
//! Algorithms that only read their input accept iterators and state the category they need
//! through the requirement traits in [`collections::iter`](crate::collections::iter). Searching
//! for a position (such as [`min_element`]) has to remember where it has been, so it requires a
//! [`ForwardIter`](crate::collections::iter::ForwardIter) and returns a copy of the iterator
//! positioned at the result. Single pass searches (such as [`find`]) return the element itself.
//!
//! Algorithms that reorder elements in place ([`sort`], [`heap`] and parts of [`modify`]) work on
//! mutable slices, which are always random access.
//!
//! Comparators follow [`slice::sort_by`]: they return the [`Ordering`](std::cmp::Ordering) of the
//! first argument relative to the second. Heaps are max-heaps with respect to the comparator.
//!
//! ```
//! # use containers_lib::algorithm::{count_if, heap_sort, max_element};
//! # use containers_lib::vector;
//! let mut vec = vector![4, 9, 1, 7];
//! assert_eq!(max_element(vec.iter()).next(), Some(&9));
//! assert_eq!(count_if(vec.iter(), |v| **v > 3), 3);
//!
//! heap_sort(&mut vec);
//! assert_eq!(vec, [1, 4, 7, 9]);
//! ```
//!
//! Position searches reject single pass iterators:
//! ```compile_fail
//! # use containers_lib::algorithm::adjacent_find;
//! # use containers_lib::collections::iter::single_pass;
//! adjacent_find(single_pass([1, 1, 2].into_iter()));
//! ```
#![warn(missing_docs)]

pub mod compare;
pub mod heap;
pub mod modify;
pub mod search;
pub mod sort;

mod tests;

#[doc(inline)]
pub use compare::*;
#[doc(inline)]
pub use heap::*;
#[doc(inline)]
pub use modify::*;
#[doc(inline)]
pub use search::*;
#[doc(inline)]
pub use sort::*;
