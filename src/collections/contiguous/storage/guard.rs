use std::mem;
use std::ptr;
use std::slice;

/// Tracks a run of values being constructed into uninitialized slots. If the guard is dropped
/// before [`finish`](ConstructGuard::finish) is called (because constructing a value panicked),
/// every value written so far is dropped again.
pub(crate) struct ConstructGuard<T> {
    start: *mut T,
    len: usize,
}

impl<T> ConstructGuard<T> {
    /// # Safety
    /// `start` must point to uninitialized slots within a single allocation, with room for every
    /// value that will be pushed.
    pub const unsafe fn new(start: *mut T) -> ConstructGuard<T> {
        ConstructGuard { start, len: 0 }
    }

    /// Writes `value` into the next slot.
    ///
    /// # Safety
    /// The next slot must be in bounds of the allocation.
    pub unsafe fn push(&mut self, value: T) {
        // SAFETY: The caller guarantees that the slot is in bounds and uninitialized.
        unsafe { self.start.add(self.len).write(value) }
        self.len += 1;
    }

    /// Disarms the guard, handing ownership of the constructed values to the caller.
    pub fn finish(self) {
        mem::forget(self);
    }
}

impl<T> Drop for ConstructGuard<T> {
    fn drop(&mut self) {
        // SAFETY: Exactly len values have been written starting at start, and ownership of them
        // hasn't been handed to anyone else.
        unsafe { ptr::drop_in_place(slice::from_raw_parts_mut(self.start, self.len)) }
    }
}
