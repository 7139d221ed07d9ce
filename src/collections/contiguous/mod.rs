//! Contiguous collection types. Namely [`Vector`], a growable sequence built on the raw storage
//! manager [`RawBuf`](storage::RawBuf).
#![warn(missing_docs)]

pub mod storage;
pub mod vector;

#[doc(inline)]
pub use vector::Vector;
