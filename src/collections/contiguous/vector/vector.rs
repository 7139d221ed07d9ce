use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut, Range, RangeBounds};
use std::ptr::NonNull;
use std::slice;

use crate::collections::contiguous::storage::RawBuf;
use crate::collections::iter::InputIter;
use crate::util::error::{
    CapacityOverflow, EmptyCollection, IndexOutOfBounds, RangeOutOfBounds, StorageError,
    VectorError,
};
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, based on [`RawBuf<T>`].
///
/// The first `len` slots of the buffer hold live values, the remaining `cap - len` slots are
/// allocated but uninitialized. Allocation only happens when the capacity has to change.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being inserted or erased.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `insert_n` / `insert_range` | `O(n-i+m)` |
/// | `remove` / `erase` | `O(n-i)` |
/// | `erase_range` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `adjust_cap` | `O(n)` |
/// | `append` | `O(n+m)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
///
/// # Failure Handling
/// Methods that can fail come in pairs: the plain method panics with the error message, while the
/// `try_` variant returns a [`Result`]. Operations that clone values (such as
/// [`insert_n`](Vector::insert_n) or [`resize`](Vector::resize)) construct every clone before
/// publishing any of them, so a panicking [`Clone`] implementation leaves the contents of the
/// Vector untouched.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: RawBuf::allocate_uninit(cap),
            len: 0,
        }
    }

    /// Creates a Vector from an iterator of at least the [`Input`](crate::collections::iter::Input)
    /// category.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let vec = Vector::from_range([3, 4, 5].into_iter());
    /// assert_eq!(vec, [3, 4, 5]);
    /// ```
    ///
    /// Iterators without a category descriptor are rejected at compile time:
    /// ```compile_fail
    /// # use containers_lib::collections::contiguous::Vector;
    /// let vec = Vector::from_range(std::iter::repeat(1).take(3));
    /// ```
    pub fn from_range<I: InputIter<Item = T>>(iter: I) -> Vector<T> {
        let mut vec = Vector::with_cap(iter.size_hint().0);
        for item in iter {
            vec.push(item);
        }
        vec
    }

    /// Creates a Vector from an [`ExactSizeIterator`], allocating exactly once.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let vec = Vector::from_iter_sized(0_u8..4);
    /// assert_eq!(vec.cap(), 4);
    /// assert_eq!(vec, [0, 1, 2, 3]);
    /// ```
    pub fn from_iter_sized<I>(value: I) -> Vector<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.len());

        // ExactSizeIterator is a safe trait, so a misbehaving implementation still needs to be
        // handled with a checked push.
        for item in iter {
            vec.push(item);
        }

        vec
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let vec = Vector::from_iter_sized(1_u8..=3);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the number of elements that can be added before the Vector has to reallocate.
    pub const fn spare_cap(&self) -> usize {
        self.buf.cap() - self.len
    }

    /// Returns a reference to the element at `index`, panicking if it is out of bounds.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let vec = vector![10, 20, 30];
    /// assert_eq!(*vec.at(1), 20);
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] if it is out of bounds
    /// rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// # use containers_lib::util::error::IndexOutOfBounds;
    /// let vec = vector![10, 20, 30];
    /// assert_eq!(vec.try_at(2), Ok(&30));
    /// assert_eq!(vec.try_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { &*self.buf.slot(index) })
    }

    /// Returns a mutable reference to the element at `index`, panicking if it is out of bounds.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] if it is out of
    /// bounds rather than panicking.
    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized. The borrow of self prevents any
        // other access for the lifetime of the reference.
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element, or an [`EmptyCollection`] error.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// # use containers_lib::collections::contiguous::Vector;
    /// # use containers_lib::util::error::EmptyCollection;
    /// assert_eq!(vector![1, 2].try_front(), Ok(&1));
    /// assert_eq!(Vector::<u8>::new().try_front(), Err(EmptyCollection));
    /// ```
    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        self.first().ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    /// Returns a mutable reference to the first element, or an [`EmptyCollection`] error.
    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.first_mut().ok_or(EmptyCollection)
    }

    /// Returns a reference to the last element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element, or an [`EmptyCollection`] error.
    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        self.last().ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    /// Returns a mutable reference to the last element, or an [`EmptyCollection`] error.
    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.last_mut().ok_or(EmptyCollection)
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Push the provided value onto the end of the Vector, returning an [`Err`] rather than
    /// panicking if the Vector can't grow. The value is dropped on failure.
    pub fn try_push(&mut self, value: T) -> Result<(), StorageError> {
        if self.len == self.cap() {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve), [`adjust_cap`](Vector::adjust_cap)
    /// or [`with_cap`](Vector::with_cap) to do so. Using this method on a Vector without enough
    /// capacity is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1_u8..=3 {
    ///     // SAFETY: We know that vec has enough capacity to store all three elements.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, so the slot at len is in bounds and uninitialized.
        unsafe { self.buf.construct(self.len, value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..5);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.try_pop().ok()
    }

    /// Pops the last value off the end of the Vector, returning an [`EmptyCollection`] error if
    /// there is nothing to pop.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        // Decrement len before taking the value, so that it is no longer considered live.
        self.len -= 1;

        // SAFETY: len has just been decremented and is within the capacity of the Vector. The value
        // at the old last index was initialized and is now outside of the live range.
        Ok(unsafe { self.buf.take(self.len) })
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Returns the index of the inserted value.
    ///
    /// An index equal to the length of the Vector appends the value.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// let index = vec.insert(1, 99);
    /// assert_eq!(vec, [1, 99, 2, 3]);
    /// assert_eq!(vec[index], 99);
    /// vec.insert(4, 100);
    /// assert_eq!(vec, [1, 99, 2, 3, 100]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] rather than panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, VectorError> {
        self.check_position(index)?;

        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: There is room for one more value. The values in index..len are shifted up by one,
        // leaving index free to receive the new value.
        unsafe {
            self.buf.shift(index, index + 1, self.len - index);
            self.buf.construct(index, value);
        }
        self.len += 1;

        Ok(index)
    }

    /// Inserts `count` clones of `value` at the given index. Returns the index of the first
    /// inserted value, which is `index` itself if `count` is 0.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length of the Vector, or if the memory
    /// layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector![1, 5];
    /// assert_eq!(vec.insert_n(1, 3, 0), 1);
    /// assert_eq!(vec, [1, 0, 0, 0, 5]);
    /// ```
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> usize
    where
        T: Clone,
    {
        self.try_insert_n(index, count, value).throw()
    }

    /// Inserts `count` clones of `value` at the given index, returning an [`Err`] rather than
    /// panicking.
    pub fn try_insert_n(
        &mut self,
        index: usize,
        count: usize,
        value: T,
    ) -> Result<usize, VectorError>
    where
        T: Clone,
    {
        self.check_position(index)?;
        if count == 0 {
            return Ok(index);
        }

        self.try_reserve_amortized(count)?;

        // SAFETY: count slots beyond len have just been reserved. The clones are built at the end
        // first, so a panicking clone leaves the existing values untouched.
        unsafe { self.buf.construct_fill(self.len, count, &value) }
        self.len += count;
        self[index..].rotate_right(count);

        Ok(index)
    }

    /// Inserts every value produced by `iter` at the given index, preserving their order. Returns
    /// the index of the first inserted value, which is `index` itself if the iterator is empty.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length of the Vector, or if the memory
    /// layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector!['a', 'e'];
    /// vec.insert_range(1, "bcd".chars());
    /// assert_eq!(vec, ['a', 'b', 'c', 'd', 'e']);
    /// ```
    #[track_caller]
    pub fn insert_range<I: InputIter<Item = T>>(&mut self, index: usize, iter: I) -> usize {
        self.try_insert_range(index, iter).throw()
    }

    /// Inserts every value produced by `iter` at the given index, returning an [`Err`] rather than
    /// panicking. On failure, the Vector holds exactly the values it held before the call.
    pub fn try_insert_range<I: InputIter<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<usize, VectorError> {
        self.check_position(index)?;

        let old_len = self.len;
        let mut guard = TruncateOnDrop {
            vec: self,
            len: old_len,
        };

        for item in iter {
            guard.vec.try_push(item)?;
        }

        guard.disarm();
        let inserted = self.len - old_len;
        self[index..].rotate_right(inserted);

        Ok(index)
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] rather than panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value is initialized. After it is moved out, the following
        // values are shifted down to fill the gap, leaving the last slot uninitialized.
        let value = unsafe {
            let value = self.buf.take(index);
            self.buf.shift(index + 1, index, self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Destroys the element at the provided index, moving all following values to fill in the gap.
    /// Returns the index of the element that followed the erased one.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        self.try_erase(index).throw()
    }

    /// Destroys the element at the provided index, returning an [`Err`] rather than panicking.
    pub fn try_erase(&mut self, index: usize) -> Result<usize, IndexOutOfBounds> {
        drop(self.try_remove(index)?);
        Ok(index)
    }

    /// Destroys all elements in `range`, moving all following values to fill in the gap. Returns
    /// the index of the element that followed the erased range.
    ///
    /// # Panics
    /// Panics if the range is reversed or ends past the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector![1, 99, 2, 3];
    /// assert_eq!(vec.erase_range(0..2), 0);
    /// assert_eq!(vec, [2, 3]);
    /// ```
    #[track_caller]
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        self.try_erase_range(range).throw()
    }

    /// Destroys all elements in `range`, returning an [`Err`] rather than panicking.
    pub fn try_erase_range<R: RangeBounds<usize>>(
        &mut self,
        range: R,
    ) -> Result<usize, RangeOutOfBounds> {
        let Range { start, end } = self.check_range(range)?;
        let tail = self.len - end;

        // Shorten first, so that a panicking destructor can at worst leak the tail.
        self.len = start;

        // SAFETY: start..end holds live values which are destroyed, then the live tail is moved
        // down into the now uninitialized gap.
        unsafe {
            self.buf.destroy_range(start..end);
            self.buf.shift(end, start, tail);
        }
        self.len = start + tail;

        Ok(start)
    }

    /// Removes the element at `index` and replaces it with the last element, without preserving
    /// the order of the Vector.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.check_index(index).throw();
        let last = self.len - 1;
        self.swap(index, last);
        // SAFETY: The Vector has at least one element, checked above.
        unsafe { self.try_pop().unwrap_unchecked() }
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        mem::replace(self.at_mut(index), new_value)
    }

    /// Destroys all elements, leaving the Vector empty. The capacity is retained.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Destroys every element at or beyond `len`. Does nothing if the Vector is already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let old_len = mem::replace(&mut self.len, len);
        // SAFETY: len..old_len held live values and is no longer considered part of the Vector.
        unsafe { self.buf.destroy_range(len..old_len) }
    }

    /// Replaces the contents of the Vector with the values produced by `iter`.
    ///
    /// The new contents are collected before the old ones are destroyed, so a panicking iterator
    /// leaves the Vector unchanged.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector![5, 4, 3, 2, 1];
    /// let arr = [1, 2, 3];
    /// vec.assign_range(arr.iter().copied());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn assign_range<I: InputIter<Item = T>>(&mut self, iter: I) {
        *self = Vector::from_range(iter);
    }

    /// Replaces the contents of the Vector with clones of the values in `values`, with the same
    /// guarantee as [`assign_range`](Vector::assign_range).
    pub fn assign_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        *self = Vector::from(values);
    }

    /// Replaces the contents of the Vector with `count` clones of `value`, with the same guarantee
    /// as [`assign_range`](Vector::assign_range).
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.assign_n(4, 0);
    /// assert_eq!(vec, [0, 0, 0, 0]);
    /// ```
    pub fn assign_n(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        *self = Vector::from_elem(value, count);
    }

    /// Resizes the Vector to `new_len`, filling any new slots with clones of `value` and destroying
    /// any elements past `new_len`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.resize(5, 0);
    /// assert_eq!(vec, [1, 2, 3, 0, 0]);
    /// vec.resize(2, 0);
    /// assert_eq!(vec, [1, 2]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        let extra = new_len - self.len;
        self.try_reserve_amortized(extra).throw();
        // SAFETY: extra slots beyond len have just been reserved and are uninitialized.
        unsafe { self.buf.construct_fill(self.len, extra, &value) }
        self.len = new_len;
    }

    /// Resizes the Vector to `new_len`, filling any new slots with the default value of `T`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the Vector to `new_len`, filling any new slots with values produced by `f`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        let extra = new_len - self.len;
        self.try_reserve_amortized(extra).throw();
        // SAFETY: extra slots beyond len have just been reserved and are uninitialized.
        unsafe { self.buf.construct_with(self.len, extra, f) }
        self.len = new_len;
    }

    /// Appends clones of every value in `values` to the end of the Vector.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.try_reserve_amortized(values.len()).throw();
        // SAFETY: values.len() slots beyond len have just been reserved. values can't overlap the
        // spare capacity because it is borrowed immutably while self is borrowed mutably.
        unsafe { self.buf.construct_clone_from(self.len, values) }
        self.len += values.len();
    }

    /// Moves all elements from `other` to the end of self.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut vec = vector![1, 2];
    /// vec.append(vector![3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, mut other: Vector<T>) {
        self.try_reserve_amortized(other.len).throw();

        // SAFETY: self has room for other.len values beyond its own len, other holds other.len
        // live values and the two allocations are distinct.
        unsafe {
            std::ptr::copy_nonoverlapping(
                other.buf.as_ptr().cast_const(),
                self.buf.slot(self.len),
                other.len,
            );
        }

        self.len += other.len;
        // Every value has been moved out, so other only has to release its allocation.
        other.len = 0;
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements, returning an
    /// [`Err`] rather than panicking. On failure, the Vector is unchanged.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), StorageError> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() {
            return Ok(());
        }

        self.buf.try_realloc(new_cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(10);
    /// vec.push(1);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 1);
    /// ```
    ///
    /// # Panics
    /// Panics if the allocator fails to provide the smaller block.
    #[track_caller]
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().throw()
    }

    /// Shrinks the Vector so that its capacity is equal to its length, returning an error if the
    /// allocator fails. On failure the Vector keeps its old buffer and is otherwise unchanged.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), StorageError> {
        if self.cap() == self.len {
            return Ok(());
        }
        log::trace!("Vector: shrinking from {} to {} slots", self.cap(), self.len);
        self.buf.try_realloc(self.len)
    }

    /// Adjusts the capacity of the Vector to `new_cap`, dropping elements if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn adjust_cap(&mut self, new_cap: usize) {
        self.truncate(new_cap);
        self.buf.realloc(new_cap);
    }

    /// Returns the contents of the Vector as a slice.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Returns the contents of the Vector as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Grows the internal buffer according to the growth policy of [`RawBuf::grown_cap`]. After
    /// calling this, the Vector can take at least one more element.
    ///
    /// Values are moved into the new allocation bitwise, which can't fail, so the only possible
    /// errors come from the allocator. In that case the Vector is unchanged.
    pub(crate) fn try_grow(&mut self) -> Result<(), StorageError> {
        self.try_reserve_amortized(1)
    }

    /// Ensures room for `extra` more elements like [`try_reserve`](Vector::try_reserve), but
    /// follows the growth policy when it has to reallocate, so that repeated appends stay
    /// amortized `O(1)` per element.
    pub(crate) fn try_reserve_amortized(&mut self, extra: usize) -> Result<(), StorageError> {
        let needed = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if needed <= self.cap() {
            return Ok(());
        }

        let new_cap = self.buf.grown_cap(self.len)?.max(needed);
        log::trace!("Vector: growing from {} to {new_cap} slots", self.cap());
        self.buf.try_realloc(new_cap)
    }

    /// Checks that the provided index refers to a live element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that the provided index is a valid insertion point, which includes the end.
    pub(crate) const fn check_position(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Resolves `range` against the length of the Vector, checking that it is in order and within
    /// bounds.
    pub(crate) fn check_range<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<Range<usize>, RangeOutOfBounds> {
        RangeOutOfBounds::resolve(range, self.len)
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector containing `count` clones of `value`.
    ///
    /// If a clone panics, every clone made so far is dropped and the allocation is released before
    /// the panic continues.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::contiguous::Vector;
    /// let vec = Vector::from_elem(7_u8, 3);
    /// assert_eq!(vec, [7, 7, 7]);
    /// ```
    pub fn from_elem(value: T, count: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(count);
        // SAFETY: vec has exactly count uninitialized slots.
        unsafe { vec.buf.construct_fill(0, count, &value) }
        vec.len = count;
        vec
    }
}

/// Truncates a Vector back to `len` when dropped, undoing a partially completed bulk insertion
/// unless [`disarm`](TruncateOnDrop::disarm) is called first.
struct TruncateOnDrop<'a, T> {
    vec: &'a mut Vector<T>,
    len: usize,
}

impl<T> TruncateOnDrop<'_, T> {
    fn disarm(mut self) {
        // Truncating to usize::MAX never removes anything.
        self.len = usize::MAX;
    }
}

impl<T> Drop for TruncateOnDrop<'_, T> {
    fn drop(&mut self) {
        self.vec.truncate(self.len);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.try_reserve_amortized(iter.size_hint().0).throw();
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop. The RawBuf is left
        // empty, so dropping it afterwards does nothing.
        unsafe { self.buf.release(self.len) }
        self.len = 0;
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't mutated due to this function taking a &self.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast_const(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't accessed due to this function taking a
        // &mut self. The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Creates an independent Vector with capacity equal to the length of self, holding clones of
    /// every element.
    fn clone(&self) -> Self {
        Vector::from(&**self)
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::with_cap(value.len());
        // SAFETY: vec has exactly value.len() uninitialized slots, in a fresh allocation that
        // can't overlap value.
        unsafe { vec.buf.construct_clone_from(0, value) }
        vec.len = value.len();
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);
        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item) }
        }
        vec
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        let mut value = ManuallyDrop::new(value);
        let (len, cap) = (value.len(), value.capacity());
        // SAFETY: A Vec's pointer is never null, and its allocation uses the global allocator with
        // the layout of [T; cap]. The Vec is never dropped, so ownership moves to the Vector.
        unsafe {
            let ptr = NonNull::new_unchecked(value.as_mut_ptr());
            Vector {
                buf: RawBuf::from_parts(ptr, cap),
                len,
            }
        }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        let mut value = ManuallyDrop::new(value);
        let buf = mem::take(&mut value.buf);
        let (ptr, len, cap) = (buf.as_ptr(), value.len, buf.cap());
        mem::forget(buf);
        // SAFETY: The buffer was allocated by the global allocator with the layout of [T; cap] (or
        // is dangling for a zero-sized layout) and holds len initialized values. Neither the
        // Vector nor its buffer are dropped.
        unsafe { Vec::from_raw_parts(ptr, len, cap) }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    /// Compares two Vectors lexicographically.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
