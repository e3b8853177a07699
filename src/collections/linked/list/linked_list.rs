use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::{Iter, IterMut, Link, Node, NodeRef};
use crate::util::error::{InvalidPosition, ListError, PredecessorNotFound};
use crate::util::fmt::DebugList;

/// A singly linked list with references to both its first and last nodes.
///
/// Positions are 1-based: `push` accepts `1..=len + 1` and `pop` accepts `1..=len`. Both ends can be
/// pushed to in constant time, but only the front can be popped in constant time, because removing
/// the last node requires walking to its predecessor.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `p`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `get` | `O(p)` |
/// | `push` | `O(1)`*, `O(p)` |
/// | `pop` | `O(1)`*, `O(p)` |
/// | `contains` | `O(n)` |
///
/// \* At the front of the list, or at the back for `push`.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| node.value())
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| node.value_mut())
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.as_ref().map(|node| node.value())
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.as_mut().map(|node| node.value_mut())
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        let node = NodeRef::from_node(Node {
            value,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NodeRef::from_node(Node {
            value,
            next: None,
        });

        match self.tail {
            Some(old_tail) => *old_tail.next_mut() = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: head is owned by this list and is unlinked by replacing self.head below, before
        // any other access.
        let node = unsafe { head.take_node() };

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty. This walks
    /// the list to find the new last node.
    pub fn pop_back(&mut self) -> Option<T> {
        self.pop(self.len).ok()
    }

    /// Inserts `value` so that it ends up at the 1-based `pos`ition. Position 1 and `len + 1` are
    /// handled in constant time, any other position walks to the preceding node first.
    ///
    /// # Errors
    /// Returns [`ListError::InvalidPosition`] if `pos` isn't in `1..=len + 1`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push(1, 'c').unwrap();
    /// list.push(1, 'a').unwrap();
    /// list.push(2, 'b').unwrap();
    /// list.push(4, 'd').unwrap();
    /// assert_eq!(list.iter().collect::<String>(), "abcd");
    /// assert!(list.push(6, 'f').is_err());
    /// ```
    pub fn push(&mut self, pos: usize, value: T) -> Result<(), ListError> {
        self.check_position(pos, self.len + 1)?;

        if pos == 1 {
            self.push_front(value);
        } else if pos == self.len + 1 {
            self.push_back(value);
        } else {
            let prev = self.predecessor(pos)?;
            let node = NodeRef::from_node(Node {
                value,
                next: *prev.next(),
            });

            *prev.next_mut() = Some(node);
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at the 1-based `pos`ition. Removing the last node moves the
    /// tail reference back to its predecessor.
    ///
    /// # Errors
    /// Returns [`ListError::InvalidPosition`] if `pos` isn't in `1..=len`.
    pub fn pop(&mut self, pos: usize) -> Result<T, ListError> {
        self.check_position(pos, self.len)?;

        if pos == 1 {
            return self.pop_front().ok_or(PredecessorNotFound { pos }.into());
        }

        let prev = self.predecessor(pos)?;
        let Some(target) = *prev.next() else {
            return Err(PredecessorNotFound { pos }.into());
        };

        // SAFETY: target is owned by this list and is unlinked from prev immediately below.
        let node = unsafe { target.take_node() };
        *prev.next_mut() = node.next;

        if self.tail == Some(target) {
            self.tail = Some(prev);
        }
        self.len -= 1;

        Ok(node.value)
    }

    /// Returns a reference to the element at the 1-based `pos`ition.
    ///
    /// # Errors
    /// Returns [`InvalidPosition`] if `pos` isn't in `1..=len`.
    pub fn get(&self, pos: usize) -> Result<&T, InvalidPosition> {
        self.check_position(pos, self.len)?;
        self.iter().nth(pos - 1).ok_or(InvalidPosition { pos, len: self.len })
    }

    /// Drops every node in the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over all elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator over all elements as mutable references, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the 1-based position of the first element equal to `item`.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|e| e == item).map(|i| i + 1)
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.position_of(item).is_some()
    }
}

impl<T> LinkedList<T> {
    /// Walks from the head to the node at `pos - 1`, the node that links to `pos`.
    pub(crate) fn predecessor(&self, pos: usize) -> Result<NodeRef<T>, PredecessorNotFound> {
        let mut node = self.head.ok_or(PredecessorNotFound { pos })?;

        for _ in 0..pos.saturating_sub(2) {
            node = (*node.next()).ok_or(PredecessorNotFound { pos })?;
        }

        Ok(node)
    }

    pub(crate) const fn check_position(&self, pos: usize, max: usize) -> Result<(), InvalidPosition> {
        if pos == 0 || pos > max {
            Err(InvalidPosition {
                pos,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that walking `len` nodes from the head ends exactly at the tail.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut last = None;
        let mut current = self.head;

        while let Some(node) = current {
            count += 1;
            last = Some(node);
            current = *node.next();
        }

        assert_eq!(count, self.len, "Walking the list should visit exactly len nodes.");
        assert!(last == self.tail, "The last node walked should be the tail.");
        assert_eq!(self.head.is_none(), self.len == 0, "Head should be None iff the list is empty.");
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

// SAFETY: LinkedLists uniquely own their nodes, so they are Send whenever T is.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access never mutates nodes, so LinkedList is Sync whenever T is.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugList(self))
            .field("head", &self.front())
            .field("tail", &self.back())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ">")
    }
}
