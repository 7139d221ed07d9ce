use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A heap allocated node. The node is owned by whichever link points at it: the head of the list
/// for the first node, the `next` field of its predecessor for every other node.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A raw handle to a [`Node`]. Copying a NodePtr doesn't copy ownership, the list's links remain
/// the only owners.
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// Moves a new node onto the heap. The caller takes ownership of the allocation and must
    /// eventually release it with [`into_node`](NodePtr::into_node).
    pub fn alloc(value: T, next: Link<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(Node { value, next }))))
    }

    /// Frees the node, returning its contents.
    ///
    /// # Safety
    /// The node must be live and unlinked from every owner, no other handle to it may be used
    /// afterwards.
    pub unsafe fn into_node(self) -> Node<T> {
        // SAFETY: Nodes are only ever allocated through Box in alloc, and the caller guarantees
        // that this is the last use of the allocation.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Returns a reference to the value stored in the node.
    ///
    /// # Safety
    /// The node must stay live for `'a`, and no mutable reference to its value may exist for
    /// that time.
    pub const unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: The caller guarantees that the node is live and not mutably borrowed.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// Returns a mutable reference to the value stored in the node.
    ///
    /// # Safety
    /// The node must stay live for `'a`, and no other reference to its value may exist for that
    /// time.
    pub const unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The caller guarantees that the node is live and not otherwise borrowed.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    /// Returns the link following the node.
    ///
    /// # Safety
    /// The node must be live.
    pub const unsafe fn next(self) -> Link<T> {
        // SAFETY: The caller guarantees that the node is live. Link is Copy, so nothing is
        // borrowed past this read.
        unsafe { (*self.0.as_ptr()).next }
    }

    /// Replaces the link following the node, returning the old one.
    ///
    /// # Safety
    /// The node must be live and not borrowed.
    pub unsafe fn set_next(self, next: Link<T>) -> Link<T> {
        // SAFETY: The caller guarantees that the node is live and that nobody else is accessing
        // its fields.
        unsafe { std::mem::replace(&mut (*self.0.as_ptr()).next, next) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
