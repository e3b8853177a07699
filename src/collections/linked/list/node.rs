use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc directly, because Box<T> lets a value
// be moved back out of the heap when the node is unlinked.

/// A non-owning handle to a heap allocated [`Node`]. Every live node is owned by exactly one
/// [`LinkedList`](super::LinkedList), either through its head or through the `next` link of its
/// predecessor. Handles are only dereferenced while that list is alive and the node is still
/// linked into it.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the allocation behind this handle, returning the node by value.
    ///
    /// # Safety
    /// The node must be live and unlinked, and no other handle to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and the caller guarantees that it
        // is reclaimed exactly once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live for as long as its owning list, which outlives any borrow handed
        // out through the list's API.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As with value. The list only hands out one mutable borrow per node at a time.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live, see value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is live, and links are only rewritten through &mut LinkedList.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
