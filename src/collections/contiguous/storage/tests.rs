#![cfg(test)]

use std::iter;
use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::util::alloc::{CloneBudget, CountedDrop, PanicOnClone, ZeroSizedType};
use crate::util::error::StorageError;
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let mut buf = RawBuf::<ZeroSizedType>::allocate_uninit(5);
    let old_ptr = buf.ptr;

    buf.realloc(30);
    assert_eq!(buf.cap(), 30, "ZST capacity should still be tracked.");
    assert_eq!(
        buf.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );

    // SAFETY: 0..3 is within the capacity.
    unsafe { buf.construct_fill(0, 3, &ZeroSizedType) }
    // SAFETY: 0..3 has just been initialized.
    unsafe { buf.release(3) }
    assert_eq!(buf.cap(), 0);
}

#[test]
fn test_growth_policy() {
    let buf = RawBuf::<u32>::new();
    assert_eq!(buf.grown_cap(0), Ok(INITIAL_CAPACITY), "Empty buffers grow to the initial cap.");

    let buf = RawBuf::<u32>::allocate_uninit(INITIAL_CAPACITY);
    assert_eq!(buf.grown_cap(INITIAL_CAPACITY), Ok(INITIAL_CAPACITY * GROWTH_FACTOR));

    let buf = RawBuf::<u32>::allocate_uninit(3);
    assert!(
        buf.grown_cap(0).is_ok_and(|cap| cap > 3),
        "Growth should always exceed the current capacity."
    );

    let buf = RawBuf::<u64> {
        // Never dereferenced or deallocated, the capacity is only used for the calculation.
        ptr: std::ptr::NonNull::dangling(),
        cap: 0,
        _phantom: std::marker::PhantomData,
    };
    assert_eq!(
        buf.grown_cap(MAX_SIZE / 8 - 1),
        Ok(MAX_SIZE / 8),
        "Growth past the maximum should be clamped while it still represents growth."
    );
    assert!(buf.grown_cap(usize::MAX).is_err());
}

#[test]
fn test_realloc() {
    let mut buf = RawBuf::<usize>::allocate_uninit(5);
    for i in 0..5 {
        // SAFETY: i < cap and the slot is uninitialized.
        unsafe { buf.construct(i, i * 10) }
    }

    let old_ptr = buf.ptr;
    buf.realloc(5);
    assert_eq!(
        buf.ptr, old_ptr,
        "When reallocating to the same capacity, the pointer shouldn't change."
    );

    buf.realloc(50);
    assert_eq!(buf.cap(), 50);
    for i in 0..5 {
        // SAFETY: The first 5 slots were initialized and realloc preserves them.
        assert_eq!(
            unsafe { *buf.slot(i) },
            i * 10,
            "When growing, all elements should remain in the buffer."
        );
    }

    // SAFETY: 0..5 is initialized.
    unsafe { buf.release(5) }
    assert_eq!(buf.cap(), 0);
    // SAFETY: The buffer is empty.
    unsafe { buf.release(0) }
    assert_eq!(buf.cap(), 0, "Releasing twice should be a no-op.");

    assert!(matches!(
        RawBuf::<u64>::try_allocate_uninit(usize::MAX),
        Err(StorageError::CapacityOverflow(_))
    ));
    assert_panics!({
        RawBuf::<u16>::allocate_uninit(isize::MAX as usize);
    }, "Capacity overflow");
}

#[test]
fn test_destroy_range() {
    let counter = CountedDrop::new(0);
    let mut buf = RawBuf::allocate_uninit(10);
    for (i, item) in iter::repeat_with(|| counter.clone()).take(10).enumerate() {
        // SAFETY: i < cap and the slot is uninitialized.
        unsafe { buf.construct(i, item) }
    }

    // SAFETY: 2..6 holds live values.
    unsafe { buf.destroy_range(2..6) }
    assert_eq!(counter.take(), 4, "Only the destroyed range should be dropped.");

    // SAFETY: 6..10 holds live values and is moved down into the destroyed slots.
    unsafe { buf.shift(6, 2, 4) }
    // SAFETY: 0..6 is now live.
    unsafe { buf.release(6) }
    assert_eq!(counter.take(), 6, "Release should drop every remaining live value.");
}

#[test]
fn test_construct_rollback() {
    let budget = CloneBudget::new(3);
    let value = PanicOnClone::new(7, &budget);
    let mut buf = RawBuf::allocate_uninit(8);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        // SAFETY: 0..8 is within the capacity and uninitialized.
        unsafe { buf.construct_fill(0, 8, &value) }
    }));
    assert!(result.is_err(), "The fourth clone should panic.");
    assert_eq!(
        budget.live.get(),
        1,
        "Every clone constructed before the panic should have been dropped."
    );

    budget.refill(usize::MAX);
    let src = [PanicOnClone::new(1, &budget), PanicOnClone::new(2, &budget)];
    // SAFETY: 0..2 is within the capacity and uninitialized after the rollback.
    unsafe { buf.construct_clone_from(0, &src) }
    assert_eq!(budget.live.get(), 5);
    // SAFETY: 0..2 was just initialized.
    unsafe { buf.release(2) }
    assert_eq!(budget.live.get(), 3);
}
