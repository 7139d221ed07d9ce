use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ops::Range;
use std::ptr::{self, NonNull};
use std::slice;

use super::ConstructGuard;
use crate::util::error::{AllocFailed, CapacityOverflow, StorageError};
use crate::util::result::ResultExtension;

/// The capacity allocated by the first growth of an empty buffer.
pub const INITIAL_CAPACITY: usize = 10;

/// The multiplier applied to the current length on every subsequent growth.
pub const GROWTH_FACTOR: usize = 2;

/// The maximum size of an allocation, in bytes.
pub const MAX_SIZE: usize = isize::MAX as usize;

/// An owned, contiguous allocation of `cap` slots of `T`, none of which are assumed to be
/// initialized.
///
/// RawBuf never drops values on its own. Dropping a RawBuf only releases the allocation, so the
/// owner has to destroy any live values first (see [`RawBuf::release`]).
///
/// Zero-sized types are never allocated, the pointer stays dangling and only the capacity changes.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots involved.
///
/// | Method | Complexity |
/// |-|-|
/// | `cap` | `O(1)` |
/// | `allocate_uninit` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `construct_fill` | `O(n)` |
/// | `construct_clone_from` | `O(n)` |
/// | `destroy_range` | `O(n)` |
/// | `release` | `O(n)` |
///
/// \* Depending on whether the allocator can resize the block in place.
pub struct RawBuf<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates an empty RawBuf with capacity 0. No memory is allocated.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::storage::RawBuf;
    /// let buf: RawBuf<u8> = RawBuf::new();
    /// assert_eq!(buf.cap(), 0);
    /// ```
    pub const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates uninitialized storage for exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or if the allocator can't satisfy
    /// the request.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::storage::RawBuf;
    /// let buf: RawBuf<u64> = RawBuf::allocate_uninit(4);
    /// assert_eq!(buf.cap(), 4);
    /// ```
    pub fn allocate_uninit(cap: usize) -> RawBuf<T> {
        Self::try_allocate_uninit(cap).throw()
    }

    /// Allocates uninitialized storage for exactly `cap` slots, returning an [`Err`] rather than
    /// panicking if the layout is too large or the allocator fails.
    pub fn try_allocate_uninit(cap: usize) -> Result<RawBuf<T>, StorageError> {
        let mut buf = RawBuf::new();
        buf.try_realloc(cap)?;
        Ok(buf)
    }

    /// Returns the number of slots owned by this RawBuf.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the first slot.
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a raw pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to [`cap`](RawBuf::cap), so that the offset stays within
    /// (or one past the end of) the allocation.
    pub const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that index <= cap, and the allocation is never larger than
        // isize::MAX bytes.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Returns the capacity that the next growth event should produce for a buffer currently
    /// holding `len` live values: [`INITIAL_CAPACITY`] when empty, `len * GROWTH_FACTOR`
    /// otherwise.
    ///
    /// If the ideal capacity would exceed the maximum layout size, the largest representable
    /// capacity is used instead, as long as it still represents growth.
    pub fn grown_cap(&self, len: usize) -> Result<usize, CapacityOverflow> {
        let ideal = match len {
            0 => INITIAL_CAPACITY,
            len => len.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
        };
        let ideal = ideal.max(self.cap.checked_add(1).ok_or(CapacityOverflow)?);

        if size_of::<T>() == 0 {
            return Ok(ideal);
        }

        let max_cap = MAX_SIZE / size_of::<T>();
        match ideal {
            ideal if ideal <= max_cap => Ok(ideal),
            _ if max_cap > self.cap => Ok(max_cap),
            _ => Err(CapacityOverflow),
        }
    }

    /// Reallocates to exactly `new_cap` slots, keeping the contents of the first
    /// `min(cap, new_cap)` slots.
    ///
    /// Slots beyond `new_cap` are released without being dropped, the caller must destroy any
    /// live values there first.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or if the allocator can't satisfy
    /// the request.
    pub fn realloc(&mut self, new_cap: usize) {
        self.try_realloc(new_cap).throw()
    }

    /// Reallocates to exactly `new_cap` slots, returning an [`Err`] rather than panicking.
    ///
    /// On failure the buffer is left exactly as it was: the old allocation is only given up once
    /// the allocator has produced the new one.
    pub fn try_realloc(&mut self, new_cap: usize) -> Result<(), StorageError> {
        let new_ptr = match (self.cap, new_cap) {
            (old, new) if old == new => return Ok(()),
            // Zero-sized types never need an allocation, only the capacity changes.
            _ if size_of::<T>() == 0 => self.ptr,
            (0, _) => {
                let layout = Self::make_layout(new_cap)?;

                log::trace!("RawBuf: allocating {new_cap} slots ({} bytes)", layout.size());

                // SAFETY: Layout has non-zero size because both zero capacity and zero-sized types
                // are guarded against.
                let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

                NonNull::new(raw_ptr).ok_or(AllocFailed::from(layout))?
            },
            (old, 0) => {
                log::trace!("RawBuf: releasing {old} slots");

                // SAFETY: ptr was allocated with this layout by the global allocator and the
                // capacity is non-zero for a non-zero-sized type.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout_unchecked(old)) }

                NonNull::dangling()
            },
            (old, new) => {
                let new_layout = Self::make_layout(new)?;

                log::trace!("RawBuf: reallocating from {old} to {new} slots");

                // SAFETY: The same layout and allocator are used as for the original allocation,
                // and the new layout has a size > 0 and <= isize::MAX.
                let raw_ptr: *mut T = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        Self::layout_unchecked(old),
                        new_layout.size(),
                    ).cast()
                };

                // A null result leaves the old block untouched, so returning early keeps self
                // valid.
                NonNull::new(raw_ptr).ok_or(AllocFailed::from(new_layout))?
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Moves `value` into the uninitialized slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than [`cap`](RawBuf::cap) and the slot must not hold a live value,
    /// otherwise that value is leaked.
    pub unsafe fn construct(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that index is in bounds of the allocation.
        unsafe { self.slot(index).write(value) }
    }

    /// Moves the live value out of the slot at `index`, leaving it uninitialized.
    ///
    /// # Safety
    /// `index` must be less than [`cap`](RawBuf::cap) and the slot must hold a live value, which
    /// the caller must from then on treat as uninitialized.
    pub unsafe fn take(&mut self, index: usize) -> T {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized.
        unsafe { self.slot(index).read() }
    }

    /// Constructs `count` clones of `value` in the uninitialized slots starting at `start`.
    ///
    /// If a clone panics, every value constructed by this call is dropped before the panic
    /// continues, so the slots are uninitialized again and nothing leaks.
    ///
    /// # Safety
    /// `start + count` must be less than or equal to [`cap`](RawBuf::cap) and the slots must not
    /// hold live values.
    pub unsafe fn construct_fill(&mut self, start: usize, count: usize, value: &T)
    where
        T: Clone,
    {
        // SAFETY: The caller guarantees that start..start + count is within the allocation.
        let mut guard = unsafe { ConstructGuard::new(self.slot(start)) };
        for _ in 0..count {
            // SAFETY: The loop runs count times, so each write lands in start..start + count.
            unsafe { guard.push(value.clone()) }
        }
        guard.finish();
    }

    /// Constructs clones of every value in `src` in the uninitialized slots starting at `start`,
    /// with the same rollback behavior as [`construct_fill`](RawBuf::construct_fill).
    ///
    /// # Safety
    /// `start + src.len()` must be less than or equal to [`cap`](RawBuf::cap), the slots must not
    /// hold live values and `src` must not overlap them.
    pub unsafe fn construct_clone_from(&mut self, start: usize, src: &[T])
    where
        T: Clone,
    {
        // SAFETY: The caller guarantees that start..start + src.len() is within the allocation.
        let mut guard = unsafe { ConstructGuard::new(self.slot(start)) };
        for value in src {
            // SAFETY: The loop runs src.len() times, so each write lands in the caller's range.
            unsafe { guard.push(value.clone()) }
        }
        guard.finish();
    }

    /// Constructs values produced by `f` in the uninitialized slots starting at `start`, with the
    /// same rollback behavior as [`construct_fill`](RawBuf::construct_fill).
    ///
    /// # Safety
    /// `start + count` must be less than or equal to [`cap`](RawBuf::cap) and the slots must not
    /// hold live values.
    pub unsafe fn construct_with<F: FnMut() -> T>(&mut self, start: usize, count: usize, mut f: F) {
        // SAFETY: The caller guarantees that start..start + count is within the allocation.
        let mut guard = unsafe { ConstructGuard::new(self.slot(start)) };
        for _ in 0..count {
            // SAFETY: The loop runs count times, so each write lands in start..start + count.
            unsafe { guard.push(f()) }
        }
        guard.finish();
    }

    /// Drops the live values in `range` in place, leaving those slots uninitialized.
    ///
    /// # Safety
    /// `range` must be within the allocation and every slot in it must hold a live value.
    pub unsafe fn destroy_range(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }

        // SAFETY: The caller guarantees that all values in range are initialized and in bounds,
        // so they form a valid slice that we have exclusive access to.
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.slot(range.start),
                range.end - range.start,
            ));
        }
    }

    /// Moves `count` values from the slots starting at `src` to the slots starting at `dst`. The
    /// two regions may overlap.
    ///
    /// Afterwards, the slots in the destination are live and the slots of the source that aren't
    /// part of the destination must be treated as uninitialized.
    ///
    /// # Safety
    /// Both regions must be within the allocation and the source must hold live values. Any live
    /// values in the destination that aren't part of the source are overwritten without being
    /// dropped.
    pub unsafe fn shift(&mut self, src: usize, dst: usize, count: usize) {
        // SAFETY: The caller guarantees that both regions are in bounds. ptr::copy handles
        // overlapping regions.
        unsafe { ptr::copy(self.slot(src), self.slot(dst), count) }
    }

    /// Destroys the live values in `0..len` and then releases the allocation, leaving an empty
    /// RawBuf. Releasing an already empty RawBuf does nothing.
    ///
    /// # Safety
    /// Every slot in `0..len` must hold a live value and `len` must not exceed
    /// [`cap`](RawBuf::cap).
    pub unsafe fn release(&mut self, len: usize) {
        // SAFETY: The caller guarantees that 0..len is initialized.
        unsafe { self.destroy_range(0..len) }
        // Shrinking to zero can't fail: there is no allocation and the layout was already valid.
        let _ = self.try_realloc(0);
    }

    /// Creates a RawBuf from its raw components.
    ///
    /// # Safety
    /// `ptr` must be allocated by the global allocator with the layout of `[T; cap]`, or dangling
    /// if that layout has zero size.
    pub const unsafe fn from_parts(ptr: NonNull<T>, cap: usize) -> RawBuf<T> {
        RawBuf {
            ptr,
            cap,
            _phantom: PhantomData,
        }
    }
}

impl<T> RawBuf<T> {
    /// A helper function to create a [`Layout`] for `cap` elements of type `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    /// Returns the layout of the current allocation.
    ///
    /// # Safety
    /// `cap` must be a capacity that this RawBuf has previously been allocated with.
    unsafe fn layout_unchecked(cap: usize) -> Layout {
        // SAFETY: A layout for this capacity has already been created successfully.
        unsafe {
            Layout::from_size_align_unchecked(size_of::<T>() * cap, align_of::<T>())
        }
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // Live values are the owner's responsibility, only the memory is released here.
        let _ = self.try_realloc(0);
    }
}

impl From<Layout> for AllocFailed {
    fn from(layout: Layout) -> Self {
        AllocFailed {
            size: layout.size(),
            align: layout.align(),
        }
    }
}

// SAFETY: RawBufs rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: RawBuf's safe API doesn't provide access to its contents, so it can implement Sync when
// T: Sync.
unsafe impl<T: Sync> Sync for RawBuf<T> {}
