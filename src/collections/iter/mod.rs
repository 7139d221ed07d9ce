//! The iterator capability system: category tags, the [`IterTraits`] descriptor and the
//! `*Iter` requirement traits used to gate algorithms and container methods at compile time.
//!
//! # Purpose
//! Rust's [`Iterator`] only describes single-pass traversal. Some operations need more than that,
//! for example [`min_element`](crate::algorithm::min_element) has to remember a position while
//! continuing to scan. Every iterator that takes part in this system declares a [`Category`]:
//!
//! | Tag | Requirement trait | Additional guarantees |
//! |-|-|-|
//! | [`Input`] | [`InputIter`] | single pass |
//! | [`Forward`] | [`ForwardIter`] | multi-pass via [`Clone`] |
//! | [`Bidirectional`] | [`BidirectionalIter`] | [`DoubleEndedIterator`] |
//! | [`RandomAccess`] | [`RandomAccessIter`] | [`ExactSizeIterator`], `O(1)` [`nth`](Iterator::nth) |
//!
//! Each tag refines the one above it, see [`AtLeast`]. Passing an iterator with an insufficient
//! category to a gated function is a compile error:
//!
//! ```compile_fail
//! # use containers_lib::algorithm::min_element;
//! # use containers_lib::collections::iter::single_pass;
//! let values = [3, 1, 2];
//! // SinglePass downgrades any iterator to Input, which can't be scanned twice.
//! min_element(single_pass(values.iter()));
//! ```
//!
//! Iterators without a descriptor (most adapters from [`std::iter`]) can still be used wherever
//! [`InputIter`] is required by wrapping them in [`SinglePass`].

mod category;
mod single_pass;
mod tests;
mod traits;

pub use category::*;
pub use single_pass::*;
pub use traits::*;
