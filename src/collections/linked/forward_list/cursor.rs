use super::{ForwardList, Link};

/// A cursor over a [`ForwardList`] that can insert and remove elements after its position in
/// `O(1)`. See [`ForwardList::cursor_mut`].
///
/// The cursor starts before the first element, a position that lets it edit the front of the
/// list. It only moves forwards.
///
/// # Examples
/// ```
/// # use containers_lib::collections::linked::ForwardList;
/// let mut list = ForwardList::from([1, 2, 3, 4]);
/// let mut cursor = list.cursor_mut();
/// // Remove every even value.
/// while let Some(next) = cursor.peek_next() {
///     if next % 2 == 0 {
///         cursor.remove_after();
///     } else {
///         cursor.move_next();
///     }
/// }
/// assert_eq!(list, [1, 3]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut ForwardList<T>,
    pub(crate) current: Link<T>,
    pub(crate) index: Option<usize>,
}

impl<T> CursorMut<'_, T> {
    /// Returns the index of the element under the cursor, or [`None`] before the first element.
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns a reference to the element under the cursor.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: current is a node of the list, which is uniquely borrowed by the cursor. The
        // reference can't outlive the borrow of self.
        self.current.map(|node| unsafe { node.value() })
    }

    /// Returns a mutable reference to the element under the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As in current, and the unique borrow of self prevents aliasing.
        self.current.map(|node| unsafe { node.value_mut() })
    }

    /// Returns a reference to the element after the cursor.
    pub fn peek_next(&self) -> Option<&T> {
        // SAFETY: current is None or a node of the list, so the following link is one of its
        // nodes or None.
        unsafe { self.list.link_following(self.current) }.map(|node| unsafe { node.value() })
    }

    /// Moves the cursor to the next element. Returns false, without moving, if the cursor is on
    /// the last element.
    pub fn move_next(&mut self) -> bool {
        // SAFETY: current is None or a node of the list.
        match unsafe { self.list.link_following(self.current) } {
            None => false,
            next => {
                self.current = next;
                self.index = Some(self.index.map_or(0, |index| index + 1));
                true
            },
        }
    }

    /// Moves the cursor back to the position before the first element.
    pub fn reset(&mut self) {
        self.current = None;
        self.index = None;
    }

    /// Inserts `value` after the cursor. The cursor doesn't move.
    pub fn insert_after(&mut self, value: T) {
        // SAFETY: current is None or a node of the list.
        unsafe { self.list.link_after(self.current, value) };
    }

    /// Removes and returns the element after the cursor, or [`None`] if the cursor is on the last
    /// element.
    pub fn remove_after(&mut self) -> Option<T> {
        // SAFETY: current is None or a node of the list.
        unsafe { self.list.unlink_after(self.current) }
    }

    /// Moves every element of `other` into the list after the cursor, preserving their order. The
    /// cursor doesn't move.
    pub fn splice_after(&mut self, other: ForwardList<T>) {
        // SAFETY: current is None or a node of the list.
        unsafe { self.list.splice_after(self.current, other) };
    }

    /// Detaches every element after the cursor into a new list.
    pub fn split_after(&mut self) -> ForwardList<T> {
        let at = self.index.map_or(0, |index| index + 1);
        // SAFETY: current is None or a node of the list, and at is the position after it.
        unsafe { self.list.split_after(self.current, at) }
    }
}
