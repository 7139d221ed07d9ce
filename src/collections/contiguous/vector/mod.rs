//! A module containing [`Vector`] and associated types.
//!
//! The only other included type is [`IntoIter`] for owned iteration over a Vector.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration, and take part in category checking through
//! [`IterTraits`](crate::collections::iter::IterTraits).
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod macros;
mod vector;

pub use iter::*;
pub use vector::*;
