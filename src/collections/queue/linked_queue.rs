use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::LinkedList;
use crate::collections::linked::list::Iter;
use crate::util::error::QueueEmpty;
use crate::util::fmt::DebugList;

/// An unbounded queue over a [`LinkedList`]: elements are enqueued at the tail and dequeued from
/// the head, both in constant time.
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedQueue<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the rear of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    /// Returns [`QueueEmpty`] if there are no elements.
    pub fn dequeue(&mut self) -> Result<T, QueueEmpty> {
        self.list.pop_front().ok_or(QueueEmpty)
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    /// Returns [`QueueEmpty`] if there are no elements.
    pub fn front(&self) -> Result<&T, QueueEmpty> {
        self.list.front().ok_or(QueueEmpty)
    }

    /// Returns a reference to the rear element.
    ///
    /// # Errors
    /// Returns [`QueueEmpty`] if there are no elements.
    pub fn rear(&self) -> Result<&T, QueueEmpty> {
        self.list.back().ok_or(QueueEmpty)
    }

    /// Returns an iterator over the elements from front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedQueue")
            .field("contents", &DebugList(&self.list))
            .field("front", &self.list.front())
            .field("rear", &self.list.back())
            .field("len", &self.len())
            .finish()
    }
}
