use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use super::Iter;
use crate::collections::contiguous::Array;
use crate::util::error::{
    AllocError, CapacityOverflow, IndexOutOfBounds, InsertError, InvalidPosition,
};
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array`].
///
/// Positions passed to [`insert`](DynamicArray::insert) are 1-based slots, while every other method
/// takes a 0-based index. Inserting at position `p` places the value at index `p - 1`.
///
/// When full, the DynamicArray doubles its capacity, so after any number of insertions the capacity
/// is the initial capacity times a power of two. It never shrinks. Growth moves every element into
/// new storage, which the borrow checker already prevents callers from observing through a held
/// reference.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)`, `O(n)`* |
/// | `erase` | `O(n-i)` |
/// | `contains` | `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, it grows, taking
/// `O(n)`.
pub struct DynamicArray<T> {
    pub(crate) slots: Array<Option<T>>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. Memory will be allocated by the
    /// first insertion.
    pub const fn new() -> DynamicArray<T> {
        DynamicArray {
            slots: Array::new(),
            len: 0,
        }
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the initial storage can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::with_cap(5).unwrap();
    /// assert_eq!(arr.cap(), 5);
    /// assert_eq!(arr.len(), 0);
    /// ```
    pub fn with_cap(cap: usize) -> Result<DynamicArray<T>, AllocError> {
        Ok(DynamicArray {
            slots: Array::try_repeat_with(cap, || None)?,
            len: 0,
        })
    }

    /// Returns the length of the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray.
    pub const fn cap(&self) -> usize {
        self.slots.size()
    }

    /// Inserts `value` at the 1-based `pos`ition, moving the elements at and after it one slot to
    /// the right. Valid positions are `1..=len + 1`, and position 0 is treated as 1.
    ///
    /// If the DynamicArray is full, it grows before anything is moved.
    ///
    /// # Errors
    /// Returns [`InsertError::InvalidPosition`] if `pos > len + 1`, or [`InsertError::Alloc`] if
    /// growth fails. In both cases nothing is modified.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::with_cap(2).unwrap();
    /// arr.insert(1, 'b').unwrap();
    /// arr.insert(1, 'a').unwrap();
    /// arr.insert(3, 'd').unwrap();
    /// arr.insert(3, 'c').unwrap();
    /// assert_eq!(arr.iter().collect::<String>(), "abcd");
    /// assert_eq!(arr.cap(), 4);
    /// assert!(arr.insert(6, 'f').is_err());
    /// ```
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), InsertError> {
        let pos = cmp::max(pos, 1);

        if pos > self.len + 1 {
            return Err(InvalidPosition {
                pos,
                len: self.len,
            }.into());
        }

        if self.len == self.cap() {
            self.grow()?;
        }

        let index = pos - 1;
        for i in (index..self.len).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }

        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Appends `value` to the end of the DynamicArray, growing if required. Equivalent to inserting
    /// at position `len + 1`.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if growth fails, leaving the DynamicArray unmodified.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.cap() {
            self.grow()?;
        }

        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        self.len = index;
        self.slots[index].take()
    }

    /// Removes the element at the 0-based `index`, moving all following elements one slot to the
    /// left. Erasing from an empty DynamicArray does nothing and returns `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the DynamicArray isn't empty and `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello".chars().collect();
    /// assert_eq!(arr.erase(1), Ok(Some('e')));
    /// assert_eq!(arr.iter().collect::<String>(), "Hllo");
    /// assert!(arr.erase(4).is_err());
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<Option<T>, IndexOutOfBounds> {
        if self.len == 0 {
            return Ok(None);
        }
        self.check_index(index)?;

        let removed = self.slots[index].take();
        for i in index + 1..self.len {
            self.slots[i - 1] = self.slots[i].take();
        }

        self.len -= 1;
        Ok(removed)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        self.slots[index].as_ref().ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len;
        self.slots[index].as_mut().ok_or(IndexOutOfBounds { index, len })
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Drops all elements, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in self.slots[..self.len].iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    /// Doubles the capacity, moving every element into new storage. An empty allocation grows to
    /// [`MIN_CAP`].
    pub(crate) fn grow(&mut self) -> Result<(), AllocError> {
        let old_cap = self.cap();
        let new_cap = cmp::max(
            old_cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
            MIN_CAP,
        );

        self.slots.realloc_with(new_cap, || None)?;
        log::debug!("grew dynamic array from {old_cap} to {new_cap} slots ({} moved)", self.len);
        Ok(())
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|e| e == item)
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    /// # Panics
    /// Panics if growth fails.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item).throw();
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    /// # Panics
    /// Panics if growth fails.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// # Panics
    /// Panics if the copy can't be allocated.
    fn clone(&self) -> Self {
        let mut slots = Array::try_repeat_with(self.cap(), || None).throw();
        for (new, old) in slots.iter_mut().zip(self.slots.iter()) {
            new.clone_from(old);
        }

        DynamicArray {
            slots,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &DebugList(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
