//! A module containing [`RawBuf`], the raw storage manager underneath
//! [`Vector`](super::Vector), and the guards used to roll back partially constructed runs.
//!
//! Allocation and initialization are kept apart: a RawBuf only knows how many slots it owns, never
//! which of them hold live values. The owning collection tracks that boundary and is responsible
//! for destroying live values before the buffer is released.

mod guard;
mod raw_buf;
mod tests;

pub(crate) use guard::*;
pub use raw_buf::*;
