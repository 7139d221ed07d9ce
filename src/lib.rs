//! A small containers library: a growable contiguous array with explicit storage management and a
//! singly linked list, plus generic algorithms gated on an iterator capability system.
//!
//! # Purpose
//! The crate exists to show how a dynamic array is put together underneath: a raw storage manager
//! that owns uninitialized memory, a container that tracks which part of it is live, and a
//! vocabulary for what an iterator can do that lets functions reject unsuitable iterators at
//! compile time.
//!
//! # Layout
//! - [`collections::iter`]: category tags ([`Input`](collections::iter::Input) through
//!   [`RandomAccess`](collections::iter::RandomAccess)), the
//!   [`IterTraits`](collections::iter::IterTraits) descriptor and the requirement traits.
//! - [`collections::contiguous`]: [`RawBuf`](collections::contiguous::storage::RawBuf) and
//!   [`Vector`](collections::contiguous::Vector).
//! - [`collections::linked`]: [`ForwardList`](collections::linked::ForwardList), a singly linked
//!   list, and its [`CursorMut`](collections::linked::CursorMut).
//! - [`collections::adapters`]: [`Stack`](collections::adapters::Stack),
//!   [`Queue`](collections::adapters::Queue) and
//!   [`PriorityQueue`](collections::adapters::PriorityQueue).
//! - [`algorithm`]: searching, comparing, removing, heaps and sorting.
//!
//! # Error Handling
//! It is more ergonomic for a container to panic in some cases, because users don't want to be
//! forced to handle an error every time they invoke a method. Imagine having to handle the
//! possibility of a capacity overflow every time you push into a Vector. So fallible methods come
//! in pairs: `push` panics with the error's message, `try_push` returns it.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). See [`util::error`].
//!
//! Cloning elements can panic part way through an operation. Every clone-driven operation builds
//! its new elements before publishing any of them, so such a panic leaves the container as it was.
//!
//! # Logging
//! Allocation events in [`RawBuf`](collections::contiguous::storage::RawBuf) are reported through
//! the [`log`] facade at trace level. The crate never installs a logger.
//!
//! # Dependencies
//! This crate uses `std` for the global allocator, but doesn't use [`Vec`] to implement any of its
//! containers. It depends on some derive macros because they remove the need for some very
//! repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithm")]
pub mod algorithm;
#[cfg(feature = "collections")]
pub mod collections;

pub mod util;
