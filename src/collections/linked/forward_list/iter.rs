use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{ForwardList, Link};
use crate::collections::iter::{Forward, Input, IterTraits};

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owning iterator over the elements of a [`ForwardList`], front to back.
pub struct IntoIter<T> {
    // Popping from the front is already O(1), so the iterator just holds the list.
    pub(crate) list: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        IntoIter {
            list: self.list.clone(),
        }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list.iter()).finish()
    }
}

impl<T> IterTraits for IntoIter<T> {
    type Category = Input;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = T;
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

/// An iterator over references to the elements of a [`ForwardList`]. Cloning it gives an
/// independent cursor over the remaining elements, so it is a [`Forward`] iterator.
pub struct Iter<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The list is borrowed for 'a, so every node reachable from it stays live and
        // unmodified for that long.
        unsafe {
            self.next = node.next();
            self.len -= 1;
            Some(node.value())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> IterTraits for Iter<'a, T> {
    type Category = Forward;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = &'a T;
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            next: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

/// An iterator over mutable references to the elements of a [`ForwardList`].
pub struct IterMut<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The list is uniquely borrowed for 'a and every node is yielded at most once, so
        // the references never alias.
        unsafe {
            self.next = node.next();
            self.len -= 1;
            Some(node.value_mut())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Hands out unique references, so it can't be cloned and only supports a single pass.
impl<'a, T> IterTraits for IterMut<'a, T> {
    type Category = Input;
    type Value = T;
    type Difference = isize;
    type Pointer = *mut T;
    type Reference = &'a mut T;
}

// SAFETY: Iter only hands out shared references, like &ForwardList.
unsafe impl<T: Sync> Send for Iter<'_, T> {}

// SAFETY: As above.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

// SAFETY: IterMut hands out unique references, like &mut ForwardList.
unsafe impl<T: Send> Send for IterMut<'_, T> {}

// SAFETY: Shared access to an IterMut doesn't reach any values.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
