use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::LinkedList;
use crate::collections::linked::list::Iter;
use crate::util::error::StackEmpty;
use crate::util::fmt::DebugList;

/// An unbounded stack, where the top of the stack is the head of a [`LinkedList`]. Pushing only
/// fails if memory runs out.
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedStack<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`StackEmpty`] if there are no elements.
    pub fn pop(&mut self) -> Result<T, StackEmpty> {
        self.list.pop_front().ok_or(StackEmpty)
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    /// Returns [`StackEmpty`] if there are no elements.
    pub fn top(&self) -> Result<&T, StackEmpty> {
        self.list.front().ok_or(StackEmpty)
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("contents", &DebugList(&self.list))
            .field("top", &self.list.front())
            .field("len", &self.len())
            .finish()
    }
}
