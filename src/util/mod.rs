//! Shared utilities. Only the [`error`] types are part of the public API, they are returned by the
//! `try_` methods throughout the crate.
#![warn(missing_docs)]

#[cfg(test)]
pub(crate) mod alloc;
pub mod error;
pub(crate) mod panic;
pub(crate) mod result;
