use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop};
use std::slice;

use super::Vector;
use crate::collections::contiguous::storage::RawBuf;
use crate::collections::iter::{IterTraits, RandomAccess};

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut vec = ManuallyDrop::new(self);
        let len = vec.len;
        IntoIter {
            // The Vector is never dropped, so the buffer and its values move into the iterator.
            buf: mem::take(&mut vec.buf),
            start: 0,
            end: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator over the elements of a [`Vector`]. The values in `start..end` are live, every
/// other slot of the buffer has already been moved out.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements that haven't been yielded yet as a slice.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::vector;
    /// let mut iter = vector![1, 2, 3].into_iter();
    /// iter.next();
    /// assert_eq!(iter.as_slice(), &[2, 3]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: start..end is within the buffer and every value in it is live.
        unsafe {
            slice::from_raw_parts(self.buf.slot(self.start).cast_const(), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.start += 1;
        // SAFETY: The old start was live and is now outside of the live range, so it is moved out
        // exactly once.
        Some(unsafe { self.buf.take(self.start - 1) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The old last value was live and is now outside of the live range.
        Some(unsafe { self.buf.take(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IterTraits for IntoIter<T> {
    type Category = RandomAccess;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

impl<T: Clone> Clone for IntoIter<T> {
    /// Clones the remaining elements into a fresh buffer.
    fn clone(&self) -> Self {
        Vector::from(self.as_slice()).into_iter()
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only start..end is still live, everything else has been moved out. The buffer
        // then releases the allocation when it is dropped.
        unsafe { self.buf.destroy_range(self.start..self.end) }
    }
}
