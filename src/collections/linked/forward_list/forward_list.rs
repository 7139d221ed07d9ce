use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::marker::PhantomData;
use std::ops::{Range, RangeBounds};

use super::{CursorMut, Iter, IterMut, Link, Node, NodePtr};
use crate::collections::iter::InputIter;
use crate::util::error::{EmptyCollection, IndexOutOfBounds, RangeOutOfBounds};
use crate::util::result::ResultExtension;

/// A singly linked list. Each node is owned by its predecessor (the first by the list itself), and
/// the list keeps a non-owning pointer to its last node so that values can be added at either
/// end.
///
/// Positions work the way they do for a singly linked sequence: values are inserted and erased
/// *after* an existing element, which only needs a link to be rewired. Inserting before the first
/// element is [`push_front`](ForwardList::push_front), or use a [`CursorMut`] for `O(1)` edits
/// while walking the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being inserted.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert_after` | `O(i)` |
/// | `insert_range_after` | `O(i + m)` |
/// | `erase_after` | `O(i)` |
/// | `append/prepend` | `O(1)` |
/// | `split_off` | `O(i)` |
/// | `contains` | `O(n)` |
///
/// The last element is always reachable directly, so any operation at index `n - 1` doesn't walk
/// the list.
///
/// # Examples
/// ```
/// # use containers_lib::collections::linked::ForwardList;
/// let mut list = ForwardList::from([1, 2, 4]);
/// assert_eq!(list.insert_after(1, 3), 2);
/// list.push_front(0);
/// assert_eq!(list, [0, 1, 2, 3, 4]);
/// assert_eq!(list.erase_after(0), 1);
/// assert_eq!(list.to_string(), "(0) -> (2) -> (3) -> (4)");
/// ```
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates an empty ForwardList.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the ForwardList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ForwardList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    /// Panics if the ForwardList is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element, or an [`EmptyCollection`] error.
    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        // SAFETY: The head is live while self is borrowed, and the shared borrow prevents any
        // mutation.
        self.head.map(|node| unsafe { node.value() }).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Panics
    /// Panics if the ForwardList is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    /// Returns a mutable reference to the first element, or an [`EmptyCollection`] error.
    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        // SAFETY: The head is live while self is borrowed, and the unique borrow of self means
        // nothing else can reach the value.
        self.head.map(|node| unsafe { node.value_mut() }).ok_or(EmptyCollection)
    }

    /// Returns a reference to the last element.
    ///
    /// # Panics
    /// Panics if the ForwardList is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element, or an [`EmptyCollection`] error.
    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        // SAFETY: The tail is live while self is borrowed, and the shared borrow prevents any
        // mutation.
        self.tail.map(|node| unsafe { node.value() }).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Panics
    /// Panics if the ForwardList is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    /// Returns a mutable reference to the last element, or an [`EmptyCollection`] error.
    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        // SAFETY: The tail is live while self is borrowed, and the unique borrow of self means
        // nothing else can reach the value.
        self.tail.map(|node| unsafe { node.value_mut() }).ok_or(EmptyCollection)
    }

    /// Adds `value` to the front of the ForwardList.
    pub fn push_front(&mut self, value: T) {
        // SAFETY: None refers to the position before the first element.
        unsafe { self.link_after(None, value) };
    }

    /// Adds `value` to the back of the ForwardList.
    pub fn push_back(&mut self, value: T) {
        // SAFETY: The tail is a node of this list, or None when the list is empty, in which case
        // the front is the back.
        unsafe { self.link_after(self.tail, value) };
    }

    /// Removes and returns the first element, or [`None`] if the ForwardList is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: None refers to the position before the first element.
        unsafe { self.unlink_after(None) }
    }

    /// Removes and returns the first element, returning an [`EmptyCollection`] error if the
    /// ForwardList is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let node = self.checked_node(index)?;
        // SAFETY: The node belongs to this list and the shared borrow prevents any mutation.
        Ok(unsafe { node.value() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let node = self.checked_node(index)?;
        // SAFETY: The node belongs to this list and the unique borrow of self means nothing else
        // can reach the value.
        Ok(unsafe { node.value_mut() })
    }

    /// Inserts `value` after the element at `index`, returning the index of the new element.
    ///
    /// # Panics
    /// Panics if `index` doesn't refer to an element.
    #[track_caller]
    pub fn insert_after(&mut self, index: usize, value: T) -> usize {
        self.try_insert_after(index, value).throw()
    }

    /// Inserts `value` after the element at `index`, returning an [`Err`] rather than panicking.
    pub fn try_insert_after(&mut self, index: usize, value: T) -> Result<usize, IndexOutOfBounds> {
        let prev = self.checked_node(index)?;
        // SAFETY: prev is a node of this list.
        unsafe { self.link_after(Some(prev), value) };
        Ok(index + 1)
    }

    /// Inserts `count` clones of `value` after the element at `index`. Returns the index of the
    /// last inserted element, which is `index` itself if `count` is zero.
    ///
    /// The clones are linked together before any of them is spliced in, so a panicking clone
    /// leaves the ForwardList unchanged.
    ///
    /// # Panics
    /// Panics if `index` doesn't refer to an element.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::linked::ForwardList;
    /// let mut list = ForwardList::from([1, 5]);
    /// assert_eq!(list.insert_n_after(0, 3, 0), 3);
    /// assert_eq!(list, [1, 0, 0, 0, 5]);
    /// ```
    #[track_caller]
    pub fn insert_n_after(&mut self, index: usize, count: usize, value: T) -> usize
    where
        T: Clone,
    {
        self.try_insert_n_after(index, count, value).throw()
    }

    /// Inserts `count` clones of `value` after the element at `index`, returning an [`Err`]
    /// rather than panicking.
    pub fn try_insert_n_after(
        &mut self,
        index: usize,
        count: usize,
        value: T,
    ) -> Result<usize, IndexOutOfBounds>
    where
        T: Clone,
    {
        let prev = self.checked_node(index)?;
        // SAFETY: prev is a node of this list.
        unsafe { self.splice_after(Some(prev), iter::repeat_n(value, count).collect()) };
        Ok(index + count)
    }

    /// Inserts every value produced by `iter` after the element at `index`, preserving their
    /// order. Returns the index of the last inserted element, which is `index` itself if the
    /// iterator is empty.
    ///
    /// If the iterator panics, the values it has produced so far are dropped and the ForwardList
    /// is unchanged.
    ///
    /// # Panics
    /// Panics if `index` doesn't refer to an element.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::linked::ForwardList;
    /// let mut list = ForwardList::from([1, 5]);
    /// assert_eq!(list.insert_range_after(0, [2, 3, 4].into_iter()), 3);
    /// assert_eq!(list, [1, 2, 3, 4, 5]);
    /// ```
    #[track_caller]
    pub fn insert_range_after<I>(&mut self, index: usize, iter: I) -> usize
    where
        I: InputIter<Item = T>,
    {
        self.try_insert_range_after(index, iter).throw()
    }

    /// Inserts every value produced by `iter` after the element at `index`, returning an [`Err`]
    /// rather than panicking. The iterator isn't consumed if `index` is invalid.
    pub fn try_insert_range_after<I>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<usize, IndexOutOfBounds>
    where
        I: InputIter<Item = T>,
    {
        let prev = self.checked_node(index)?;
        let run: ForwardList<T> = iter.collect();
        let count = run.len;
        // SAFETY: prev is a node of this list.
        unsafe { self.splice_after(Some(prev), run) };
        Ok(index + count)
    }

    /// Removes and returns the element following the one at `index`.
    ///
    /// # Panics
    /// Panics if there is no element at `index + 1`.
    #[track_caller]
    pub fn erase_after(&mut self, index: usize) -> T {
        self.try_erase_after(index).throw()
    }

    /// Removes and returns the element following the one at `index`, returning an [`Err`] rather
    /// than panicking.
    pub fn try_erase_after(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let next = index.saturating_add(1);
        if next >= self.len {
            return Err(IndexOutOfBounds {
                index: next,
                len: self.len,
            });
        }
        let prev = self.checked_node(index)?;
        // SAFETY: prev is a node of this list.
        unsafe { self.unlink_after(Some(prev)) }.ok_or(IndexOutOfBounds {
            index: next,
            len: self.len,
        })
    }

    /// Removes every element in `range`, returning the index of the element that followed it
    /// (which is the start of the range after the removal).
    ///
    /// # Panics
    /// Panics if the range is reversed or reaches past the end of the ForwardList.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::linked::ForwardList;
    /// let mut list = ForwardList::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.erase_range(1..3), 1);
    /// assert_eq!(list, [1, 4, 5]);
    /// ```
    #[track_caller]
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        self.try_erase_range(range).throw()
    }

    /// Removes every element in `range`, returning an [`Err`] rather than panicking.
    pub fn try_erase_range<R: RangeBounds<usize>>(
        &mut self,
        range: R,
    ) -> Result<usize, RangeOutOfBounds> {
        let Range { start, end } = RangeOutOfBounds::resolve(range, self.len)?;
        if start == end {
            return Ok(start);
        }

        let prev = self.node_before(start);
        // SAFETY: prev is a node of this list, or the position before the first element.
        let mut erased = unsafe { self.split_after(prev, start) };
        let rest = erased.split_off(end - start);
        drop(erased);
        self.append(rest);
        Ok(start)
    }

    /// Splits the ForwardList in two at `at`. Afterwards self holds the elements in `0..at` and
    /// the returned list holds the rest.
    ///
    /// # Panics
    /// Panics if `at` is greater than the length of the ForwardList.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::linked::ForwardList;
    /// let mut list = ForwardList::from(['a', 'b', 'c']);
    /// let rest = list.split_off(1);
    /// assert_eq!(list, ['a']);
    /// assert_eq!(rest, ['b', 'c']);
    /// ```
    #[track_caller]
    pub fn split_off(&mut self, at: usize) -> ForwardList<T> {
        self.try_split_off(at).throw()
    }

    /// Splits the ForwardList in two at `at`, returning an [`Err`] rather than panicking.
    pub fn try_split_off(&mut self, at: usize) -> Result<ForwardList<T>, IndexOutOfBounds> {
        if at > self.len {
            return Err(IndexOutOfBounds {
                index: at,
                len: self.len,
            });
        }
        let prev = self.node_before(at);
        // SAFETY: prev is a node of this list, or the position before the first element.
        Ok(unsafe { self.split_after(prev, at) })
    }

    /// Moves every element of `other` to the back of self in `O(1)`.
    pub fn append(&mut self, other: ForwardList<T>) {
        // SAFETY: The tail is a node of this list, or None when the list is empty.
        unsafe { self.splice_after(self.tail, other) };
    }

    /// Moves every element of `other` to the front of self, preserving their order, in `O(1)`.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::linked::ForwardList;
    /// let mut list = ForwardList::from([3, 4]);
    /// list.prepend(ForwardList::from([1, 2]));
    /// assert_eq!(list, [1, 2, 3, 4]);
    /// ```
    pub fn prepend(&mut self, other: ForwardList<T>) {
        // SAFETY: None refers to the position before the first element.
        unsafe { self.splice_after(None, other) };
    }

    /// Destroys all elements, leaving the ForwardList empty.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Shortens the ForwardList to `len` elements, dropping the rest. Does nothing if the list is
    /// already shorter.
    pub fn truncate(&mut self, len: usize) {
        if let Ok(rest) = self.try_split_off(len) {
            drop(rest);
        }
    }

    /// Replaces the contents of the ForwardList with the values produced by `iter`.
    ///
    /// The replacement is built before the current elements are dropped, so a panicking iterator
    /// leaves the ForwardList unchanged.
    pub fn assign_range<I: InputIter<Item = T>>(&mut self, iter: I) {
        *self = iter.collect();
    }

    /// Replaces the contents of the ForwardList with `count` clones of `value`.
    pub fn assign_n(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        *self = iter::repeat_n(value, count).collect();
    }

    /// Resizes the ForwardList to `new_len`, appending clones of `value` or dropping elements
    /// from the back as required.
    ///
    /// # Examples
    /// ```
    /// # use containers_lib::collections::linked::ForwardList;
    /// let mut list = ForwardList::from([1, 2]);
    /// list.resize(4, 0);
    /// assert_eq!(list, [1, 2, 0, 0]);
    /// list.resize(1, 0);
    /// assert_eq!(list, [1]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        match new_len.checked_sub(self.len) {
            Some(extra) => self.append(iter::repeat_n(value, extra).collect()),
            None => self.truncate(new_len),
        }
    }

    /// Resizes the ForwardList to `new_len`, appending values produced by `f` or dropping
    /// elements from the back as required.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        match new_len.checked_sub(self.len) {
            Some(extra) => self.append(iter::repeat_with(f).take(extra).collect()),
            None => self.truncate(new_len),
        }
    }

    /// Returns true if the ForwardList contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Returns a cursor positioned before the first element, which can insert and remove elements
    /// in `O(1)` as it walks the list.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            list: self,
            current: None,
            index: None,
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> ForwardList<T> {
    /// Returns the node at `index`, if there is one. The last node is found without walking the
    /// list.
    pub(crate) fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return self.tail;
        }

        let mut link = self.head;
        for _ in 0..index {
            // SAFETY: Every node reachable from head is live.
            link = link.and_then(|node| unsafe { node.next() });
        }
        link
    }

    /// Returns the node preceding position `at`, or None for the position before the first
    /// element.
    pub(crate) fn node_before(&self, at: usize) -> Link<T> {
        at.checked_sub(1).and_then(|index| self.node_at(index))
    }

    pub(crate) fn checked_node(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        self.node_at(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns the link following `prev`, treating None as the position before the first element.
    ///
    /// # Safety
    /// `prev` must be None or a node of this list.
    pub(crate) unsafe fn link_following(&self, prev: Link<T>) -> Link<T> {
        match prev {
            None => self.head,
            // SAFETY: The caller guarantees that prev is a live node of this list.
            Some(node) => unsafe { node.next() },
        }
    }

    /// Points the link following `prev` at `next`, returning what it pointed at before.
    ///
    /// # Safety
    /// `prev` must be None or a node of this list.
    unsafe fn relink(&mut self, prev: Link<T>, next: Link<T>) -> Link<T> {
        match prev {
            None => std::mem::replace(&mut self.head, next),
            // SAFETY: The caller guarantees that prev is a live node of this list, and the unique
            // borrow of self means nobody else is accessing it.
            Some(node) => unsafe { node.set_next(next) },
        }
    }

    /// Allocates a node for `value` and links it in after `prev`.
    ///
    /// # Safety
    /// `prev` must be None or a node of this list.
    pub(crate) unsafe fn link_after(&mut self, prev: Link<T>, value: T) -> NodePtr<T> {
        // SAFETY: The caller guarantees that prev is valid for this list.
        let next = unsafe { self.link_following(prev) };
        let node = NodePtr::alloc(value, next);
        // SAFETY: As above. The new node takes over ownership of next.
        unsafe { self.relink(prev, Some(node)) };
        if next.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
        node
    }

    /// Unlinks the node following `prev` and returns its value, or None if `prev` is the last
    /// node.
    ///
    /// # Safety
    /// `prev` must be None or a node of this list.
    pub(crate) unsafe fn unlink_after(&mut self, prev: Link<T>) -> Option<T> {
        // SAFETY: The caller guarantees that prev is valid for this list.
        let node = unsafe { self.link_following(prev) }?;
        // SAFETY: node belongs to this list, so it is live. Once prev skips over it nothing owns
        // it any more and it is freed exactly once.
        let Node { value, next } = unsafe { node.into_node() };
        // SAFETY: prev is still valid, only the node after it was removed.
        unsafe { self.relink(prev, next) };
        if next.is_none() {
            self.tail = prev;
        }
        self.len -= 1;
        Some(value)
    }

    /// Links every node of `other` in after `prev`, returning the last node inserted, or `prev`
    /// if `other` is empty.
    ///
    /// # Safety
    /// `prev` must be None or a node of this list.
    pub(crate) unsafe fn splice_after(
        &mut self,
        prev: Link<T>,
        mut other: ForwardList<T>,
    ) -> Link<T> {
        let (Some(first), Some(last)) = (other.head, other.tail) else {
            return prev;
        };

        // SAFETY: The caller guarantees that prev is valid for this list.
        let next = unsafe { self.link_following(prev) };
        // SAFETY: last is the final node of other, so its next link is empty and it can take over
        // ownership of next.
        unsafe { last.set_next(next) };
        // SAFETY: As above. prev takes over ownership of first from other.
        unsafe { self.relink(prev, Some(first)) };
        if next.is_none() {
            self.tail = Some(last);
        }
        self.len += other.len;

        // Every node now belongs to self.
        other.head = None;
        other.tail = None;
        other.len = 0;
        Some(last)
    }

    /// Detaches every node after `prev` into a new list, where `at` is the position following
    /// `prev`.
    ///
    /// # Safety
    /// `prev` must be None or a node of this list, and `at` must be its position plus one (zero
    /// for None).
    pub(crate) unsafe fn split_after(&mut self, prev: Link<T>, at: usize) -> ForwardList<T> {
        // SAFETY: The caller guarantees that prev is valid for this list.
        let head = unsafe { self.relink(prev, None) };
        if head.is_none() {
            return ForwardList::new();
        }

        let split = ForwardList {
            head,
            tail: std::mem::replace(&mut self.tail, prev),
            len: self.len - at,
            _phantom: PhantomData,
        };
        self.len = at;
        split
    }

    /// Walks the whole list, checking that the length and tail pointer agree with the links.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut last = None;
        let mut link = self.head;
        while let Some(node) = link {
            count += 1;
            last = Some(node);
            // SAFETY: Every node reachable from head is live.
            link = unsafe { node.next() };
        }
        assert_eq!(count, self.len, "The length should match the number of linked nodes.");
        assert!(last == self.tail, "The tail should point at the last linked node.");
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        // Popping one node at a time keeps long lists from recursing.
        self.clear();
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<[T]> for ForwardList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ForwardList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardList")
            .field("contents", &self.iter())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}

// SAFETY: The list owns its values like a Box would, the raw pointers are never shared with
// another list.
unsafe impl<T: Send> Send for ForwardList<T> {}

// SAFETY: Shared access to the list only hands out shared references to its values.
unsafe impl<T: Sync> Sync for ForwardList<T> {}
