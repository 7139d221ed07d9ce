use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use crate::algorithm::{make_heap_by, pop_heap_by, push_heap_by, sort_heap_by};
use crate::collections::contiguous::Vector;
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// The comparator used by [`PriorityQueue::new`], which makes the greatest element the top.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// A priority queue implemented as a binary max-heap on top of a [`Vector`], using the heap
/// functions from [`algorithm`](crate::algorithm).
///
/// The top of the queue is the element that orders greatest according to the comparator `F`.
/// Reversing the comparator turns the queue into a min-queue.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `top` | `O(1)` |
/// | `push` | `O(log n)`*, `O(n)` |
/// | `pop` | `O(log n)` |
/// | `from` | `O(n)` |
/// | `into_sorted` | `O(n log n)` |
///
/// \* If the underlying Vector has to grow, `push` will take `O(n)`.
///
/// # Examples
/// ```
/// # use containers_lib::collections::adapters::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.push(3);
/// queue.push(7);
/// queue.push(5);
/// assert_eq!(*queue.top(), 7);
/// assert_eq!(queue.pop(), Some(7));
/// assert_eq!(queue.pop(), Some(5));
///
/// let mut min_queue = PriorityQueue::with_compare(|a: &i32, b: &i32| b.cmp(a));
/// min_queue.extend([3, 7, 5]);
/// assert_eq!(min_queue.pop(), Some(3));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, F = NaturalOrder<T>> {
    pub(crate) heap: Vector<T>,
    pub(crate) compare: F,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty max-queue ordered by [`Ord`].
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue::with_compare(T::cmp as NaturalOrder<T>)
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Creates an empty queue ordered by `compare`.
    pub const fn with_compare(compare: F) -> PriorityQueue<T, F> {
        PriorityQueue {
            heap: Vector::new(),
            compare,
        }
    }

    /// Creates a queue holding the elements of `vec`, ordered by `compare`.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::adapters::PriorityQueue;
    /// # use containers_lib::vector;
    /// let tasks = vector![(2, 'b'), (7, 'a'), (1, 'c')];
    /// let queue = PriorityQueue::from_vector(tasks, |a: &(u8, char), b: &(u8, char)| a.1.cmp(&b.1));
    /// assert_eq!(*queue.top(), (1, 'c'));
    /// ```
    pub fn from_vector(mut vec: Vector<T>, mut compare: F) -> PriorityQueue<T, F> {
        make_heap_by(&mut vec, &mut compare);
        PriorityQueue { heap: vec, compare }
    }

    /// Returns the number of elements in the queue.
    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds `value` to the queue.
    ///
    /// # Panics
    /// Panics if the memory layout of the underlying Vector would have a size that exceeds
    /// [`isize::MAX`].
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        push_heap_by(&mut self.heap, &mut self.compare);
    }

    /// Removes and returns the greatest element, or [`None`] if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.try_pop().ok()
    }

    /// Removes and returns the greatest element, returning an [`EmptyCollection`] error if the
    /// queue is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        pop_heap_by(&mut self.heap, &mut self.compare);
        self.heap.try_pop()
    }

    /// Returns a reference to the greatest element.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    /// Returns a reference to the greatest element, or an [`EmptyCollection`] error.
    pub fn try_top(&self) -> Result<&T, EmptyCollection> {
        self.heap.try_front()
    }

    /// Consumes the queue, returning its elements sorted in ascending order by the comparator.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::adapters::PriorityQueue;
    /// let queue: PriorityQueue<_> = [4, 1, 3].into_iter().collect();
    /// assert_eq!(queue.into_sorted(), [1, 3, 4]);
    /// ```
    pub fn into_sorted(self) -> Vector<T> {
        let PriorityQueue {
            mut heap,
            mut compare,
        } = self;
        sort_heap_by(&mut heap, &mut compare);
        heap
    }

    /// Consumes the queue, returning its elements in heap order.
    pub fn into_vector(self) -> Vector<T> {
        self.heap
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vector<T>> for PriorityQueue<T> {
    fn from(vec: Vector<T>) -> Self {
        PriorityQueue::from_vector(vec, T::cmp as NaturalOrder<T>)
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from(Vector::from_iter(iter))
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Debug, F> Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("top", &self.heap.first())
            .field("len", &self.heap.len())
            .finish()
    }
}
