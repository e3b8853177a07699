use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use crate::collections::contiguous::Array;
use crate::util::error::{AllocError, QueueFull};
use crate::util::fmt::DebugList;

/// The capacity used when a queue is requested with no capacity at all.
const DEFAULT_CAP: usize = 10;

/// A fixed-capacity queue stored in a ring of slots.
///
/// One slot is always left empty, so that a full queue (`(rear + 1) % cap == front`) can be told
/// apart from an empty one (`rear == front`). A queue created with capacity `n` therefore holds at
/// most `n - 1` elements. Indices wrap around the ring, so slots freed by
/// [`dequeue`](CircularQueue::dequeue) are reused by later enqueues.
///
/// Dequeuing from an empty queue isn't an error: it logs a warning and returns [`None`].
pub struct CircularQueue<T> {
    pub(crate) slots: Array<Option<T>>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
    pub(crate) len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with `cap` slots, of which `cap - 1` are usable. A `cap` of 0 is
    /// replaced with a default of 10 slots.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the storage can't be allocated.
    pub fn with_cap(cap: usize) -> Result<CircularQueue<T>, AllocError> {
        let cap = if cap == 0 { DEFAULT_CAP } else { cap };

        Ok(CircularQueue {
            slots: Array::try_repeat_with(cap, || None)?,
            front: 0,
            rear: 0,
            len: 0,
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.rear == self.front
    }

    /// Returns the number of slots in the ring.
    pub const fn cap(&self) -> usize {
        self.slots.size()
    }

    /// Returns the maximum number of elements the queue can hold, one less than [`cap`](Self::cap).
    pub const fn usable_cap(&self) -> usize {
        self.cap() - 1
    }

    pub const fn is_full(&self) -> bool {
        (self.rear + 1) % self.cap() == self.front
    }

    /// Returns the index of the slot holding the front element.
    pub const fn front_index(&self) -> usize {
        self.front
    }

    /// Returns the index of the slot the next enqueued element will be written to.
    pub const fn rear_index(&self) -> usize {
        self.rear
    }

    /// Adds `value` to the rear of the queue.
    ///
    /// # Errors
    /// Returns [`QueueFull`] if the queue already holds `cap - 1` elements. The value is dropped in
    /// that case.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::queue::CircularQueue;
    /// let mut queue = CircularQueue::with_cap(3).unwrap();
    /// queue.enqueue('a').unwrap();
    /// queue.enqueue('b').unwrap();
    /// assert!(queue.enqueue('c').is_err());
    /// assert_eq!(queue.dequeue(), Some('a'));
    /// queue.enqueue('c').unwrap();
    /// ```
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueFull> {
        if self.is_full() {
            return Err(QueueFull { cap: self.cap() });
        }

        self.slots[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.cap();
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element. On an empty queue this only logs a warning and
    /// returns [`None`].
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            log::warn!("dequeue on an empty circular queue ignored (front = rear = {})", self.front);
            return None;
        }

        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.cap();
        self.len -= 1;
        value
    }

    /// Returns a reference to the front element, if there is one.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.front].as_ref()
        }
    }

    /// Returns an iterator over the elements from front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            index: self.front,
            remaining: self.len,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) slots: &'a [Option<T>],
    pub(crate) index: usize,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;
        let value = self.slots[self.index].as_ref();
        self.index = (self.index + 1) % self.slots.len();
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("contents", &DebugList(self))
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
