use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::ForwardList;
use crate::collections::linked::forward_list::IntoIter;
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A first in, first out queue backed by a [`ForwardList`]. Values join at the back of the list
/// and leave from the front, so every operation is `O(1)` and never moves existing elements.
///
/// # Examples
/// ```
/// # use containers_lib::collections::adapters::Queue;
/// let mut queue = Queue::new();
/// queue.push('a');
/// queue.push('b');
/// assert_eq!(*queue.front(), 'a');
/// assert_eq!(*queue.back(), 'b');
/// assert_eq!(queue.pop(), Some('a'));
/// assert_eq!(queue.pop(), Some('b'));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Queue<T> {
    pub(crate) list: ForwardList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            list: ForwardList::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the front element, or [`None`] if the Queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Removes and returns the front element, returning an [`EmptyCollection`] error if the Queue
    /// is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.list.try_pop_front()
    }

    /// Returns a reference to the front element, the next one to be popped.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the front element, or an [`EmptyCollection`] error.
    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        self.list.try_front()
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        self.list.front_mut()
    }

    /// Returns a reference to the back element, the most recently pushed one.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the back element, or an [`EmptyCollection`] error.
    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        self.list.try_back()
    }

    /// Returns a mutable reference to the back element.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        self.list.back_mut()
    }

    /// Consumes the Queue, returning the underlying ForwardList with the front of the Queue at
    /// its front.
    pub fn into_inner(self) -> ForwardList<T> {
        self.list
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<ForwardList<T>> for Queue<T> {
    /// Uses `list` as a Queue, its first element becomes the front.
    fn from(list: ForwardList<T>) -> Self {
        Queue { list }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: ForwardList::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Drains the Queue in the order values would be popped.
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front", &self.list.try_front().ok())
            .field("back", &self.list.try_back().ok())
            .field("len", &self.len())
            .finish()
    }
}
