use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{AllocError, StackEmpty, StackFull};
use crate::util::fmt::DebugList;

/// A stack with a capacity fixed at creation. Pushing onto a full stack fails with [`StackFull`]
/// rather than growing.
///
/// The top of the stack is always at index `len - 1` of the backing storage.
pub struct ArrayStack<T> {
    pub(crate) slots: Array<Option<T>>,
    pub(crate) len: usize,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack able to hold exactly `cap` elements.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the storage can't be allocated.
    pub fn with_cap(cap: usize) -> Result<ArrayStack<T>, AllocError> {
        Ok(ArrayStack {
            slots: Array::try_repeat_with(cap, || None)?,
            len: 0,
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn cap(&self) -> usize {
        self.slots.size()
    }

    pub const fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Returns the index of the top element in the backing storage, if there is one.
    pub const fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// # Errors
    /// Returns [`StackFull`] if the stack is at capacity. The value is dropped in that case.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::stack::ArrayStack;
    /// let mut stack = ArrayStack::with_cap(2).unwrap();
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    /// assert!(stack.push(3).is_err());
    /// assert_eq!(stack.pop(), Ok(2));
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), StackFull> {
        if self.is_full() {
            return Err(StackFull { cap: self.cap() });
        }

        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`StackEmpty`] if there are no elements.
    pub fn pop(&mut self) -> Result<T, StackEmpty> {
        let top = self.top_index().ok_or(StackEmpty)?;
        let value = self.slots[top].take().ok_or(StackEmpty)?;
        self.len = top;
        Ok(value)
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    /// Returns [`StackEmpty`] if there are no elements.
    pub fn top(&self) -> Result<&T, StackEmpty> {
        let top = self.top_index().ok_or(StackEmpty)?;
        self.slots[top].as_ref().ok_or(StackEmpty)
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    pub(crate) inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_back()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("contents", &DebugList(self))
            .field("top", &self.top().ok())
            .field("top_index", &self.top_index())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
