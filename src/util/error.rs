//! Error types shared by every collection in the crate.
//!
//! Each failure has its own (often zero-sized) struct, with enums deriving their boilerplate where
//! a method can fail in more than one way.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::{Bound, Range, RangeBounds};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the initialized elements of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time of the access.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A range of indices was reversed or reached past the initialized elements of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOutOfBounds {
    /// The inclusive start of the offending range.
    pub start: usize,
    /// The exclusive end of the offending range.
    pub end: usize,
    /// The length of the collection at the time of the access.
    pub len: usize,
}

impl Display for RangeOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range {}..{} out of bounds for collection with {} elements!",
            self.start, self.end, self.len
        )
    }
}

impl Error for RangeOutOfBounds {}

impl RangeOutOfBounds {
    /// Resolves `range` against a collection of `len` elements, checking that it is in order and
    /// within bounds.
    pub(crate) fn resolve<R: RangeBounds<usize>>(
        range: R,
        len: usize,
    ) -> Result<Range<usize>, RangeOutOfBounds> {
        let start = match range.start_bound() {
            Bound::Included(start) => Some(*start),
            Bound::Excluded(start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(end) => end.checked_add(1),
            Bound::Excluded(end) => Some(*end),
            Bound::Unbounded => Some(len),
        };

        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
            (start, end) => Err(RangeOutOfBounds {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                len,
            }),
        }
    }
}

/// The requested capacity can't be represented by a memory layout of at most [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator returned null for a valid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailed {
    /// The size of the layout that couldn't be allocated, in bytes.
    pub size: usize,
    /// The alignment of the layout that couldn't be allocated.
    pub align: usize,
}

impl Display for AllocFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate {} bytes (align {})!", self.size, self.align)
    }
}

impl Error for AllocFailed {}

/// An operation that requires at least one element was invoked on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection is empty!")
    }
}

impl Error for EmptyCollection {}

/// Errors produced while obtaining or resizing raw storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum StorageError {
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
    /// See [`AllocFailed`].
    AllocFailed(AllocFailed),
}

/// Every error that a [`Vector`](crate::collections::contiguous::Vector) method can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum VectorError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`RangeOutOfBounds`].
    RangeOutOfBounds(RangeOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
    /// See [`AllocFailed`].
    AllocFailed(AllocFailed),
    /// See [`EmptyCollection`].
    EmptyCollection(EmptyCollection),
}

impl From<StorageError> for VectorError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::CapacityOverflow(err) => VectorError::CapacityOverflow(err),
            StorageError::AllocFailed(err) => VectorError::AllocFailed(err),
        }
    }
}
