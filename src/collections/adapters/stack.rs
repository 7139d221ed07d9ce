use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A last in, first out stack backed by a [`Vector`]. The top of the stack is the back of the
/// Vector, so every operation is `O(1)` (amortized for `push`).
///
/// # Examples
/// ```
/// # use containers_lib::collections::adapters::Stack;
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(*stack.top(), 'b');
/// assert_eq!(stack.pop(), Some('b'));
/// assert_eq!(stack.pop(), Some('a'));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) vec: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates an empty Stack without allocating.
    pub const fn new() -> Stack<T> {
        Stack { vec: Vector::new() }
    }

    /// Creates an empty Stack with room for `cap` elements.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            vec: Vector::with_cap(cap),
        }
    }

    /// Returns the number of elements on the Stack.
    pub const fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Panics
    /// Panics if the memory layout of the underlying Vector would have a size that exceeds
    /// [`isize::MAX`].
    pub fn push(&mut self, value: T) {
        self.vec.push(value);
    }

    /// Removes and returns the top element, or [`None`] if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }

    /// Removes and returns the top element, returning an [`EmptyCollection`] error if the Stack is
    /// empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.vec.try_pop()
    }

    /// Returns a reference to the top element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    #[track_caller]
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    /// Returns a reference to the top element, or an [`EmptyCollection`] error.
    pub fn try_top(&self) -> Result<&T, EmptyCollection> {
        self.vec.try_back()
    }

    /// Returns a mutable reference to the top element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    #[track_caller]
    pub fn top_mut(&mut self) -> &mut T {
        self.vec.back_mut()
    }

    /// Consumes the Stack, returning the underlying Vector with the top of the Stack at the back.
    pub fn into_inner(self) -> Vector<T> {
        self.vec
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vector<T>> for Stack<T> {
    /// Uses `vec` as a Stack, its last element becomes the top.
    fn from(vec: Vector<T>) -> Self {
        Stack { vec }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            vec: Vector::from_iter(iter),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.vec.last())
            .field("len", &self.len())
            .finish()
    }
}
