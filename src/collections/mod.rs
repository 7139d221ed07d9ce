//! Various general-purpose collection types.
//!
//! # Purpose
//! [`Vector`](contiguous::Vector) is the core of this module: a growable contiguous sequence whose
//! raw storage is managed separately by [`RawBuf`](contiguous::storage::RawBuf).
//! [`ForwardList`](linked::ForwardList) is its node based counterpart, for sequences that are
//! edited in the middle. The adapters narrow either one down to a more restricted
//! interface.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality. Methods that take ranges of elements
//! state the iterator category they need through [`iter`].

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "iter")]
pub mod iter;
#[cfg(feature = "linked")]
pub mod linked;
