//! Container adapters, which restrict a [`Vector`](crate::collections::contiguous::Vector) or a
//! [`ForwardList`](crate::collections::linked::ForwardList) to a narrower interface.
//!
//! - [`Stack`]: last in, first out.
//! - [`Queue`]: first in, first out.
//! - [`PriorityQueue`]: greatest element first, according to a comparator.
#![warn(missing_docs)]

mod priority_queue;
mod queue;
mod stack;
mod tests;

pub use priority_queue::*;
pub use queue::*;
pub use stack::*;
