use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::{mem, slice};

use crate::util::error::{AllocError, CapacityOverflow, OutOfMemory};

/// A fixed-size, heap allocated run of initialized values. Similar to a [`Box<[T]>`](Box<T>),
/// except that every allocation is fallible and reported as an [`AllocError`] instead of aborting.
///
/// This is the only type in the crate that allocates contiguous memory. Growable collections hold
/// an `Array` of slots and replace it wholesale through [`Array::realloc_with`] when they grow, so
/// any reference into the old storage is invalidated by the borrow checker rather than by
/// convention.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `try_repeat_with` | `O(n)` |
/// | `realloc_with` | `O(n)` |
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. No memory is allocated.
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of `size` values, each produced by calling `f`.
    ///
    /// # Errors
    /// Returns [`AllocError::CapacityOverflow`] if the memory layout would exceed [`isize::MAX`]
    /// bytes, or [`AllocError::OutOfMemory`] if the allocator fails.
    pub fn try_repeat_with<F>(size: usize, mut f: F) -> Result<Array<T>, AllocError>
    where
        F: FnMut() -> T,
    {
        let layout = Self::make_layout(size)?;
        let ptr = Self::make_ptr(layout)?;

        for i in 0..size {
            // SAFETY: The allocation holds exactly size values of T, so every offset < size is in
            // bounds and properly aligned.
            unsafe { ptr.add(i).write(f()); }
        }

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Replaces the storage of this Array with a new allocation of `new_size` values. The first
    /// `min(size, new_size)` values are moved across in order, new trailing values are produced by
    /// `f` and any values beyond `new_size` are dropped.
    ///
    /// On failure the Array is left exactly as it was.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new allocation can't be made.
    pub fn realloc_with<F>(&mut self, new_size: usize, f: F) -> Result<(), AllocError>
    where
        F: FnMut() -> T,
    {
        let mut new_arr = Array::try_repeat_with(new_size, f)?;

        for (new, old) in new_arr.iter_mut().zip(self.iter_mut()) {
            mem::swap(new, old);
        }

        // The old storage now holds the filler values for any moved slots, which are dropped along
        // with the allocation itself.
        drop(mem::replace(self, new_arr));
        Ok(())
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<T>, OutOfMemory> {
        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).ok_or(OutOfMemory { bytes: layout.size() })
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new Array by repeating the default value of `T` `size` times.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the allocation can't be made.
    pub fn try_repeat_default(size: usize) -> Result<Array<T>, AllocError> {
        Array::try_repeat_with(size, T::default)
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized and are never accessed again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        // The layout was already created successfully when this Array was allocated, so Err can't
        // occur here.
        let Ok(layout) = Self::make_layout(self.size) else { return };

        if layout.size() != 0 {
            // SAFETY: ptr was allocated by the global allocator with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout); }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The Array holds size initialized values at ptr, which is nonnull and aligned even
        // when dangling for a size of 0.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the borrow checker guarantees exclusive access through &mut
        // self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: Arrays uniquely own their values, so they are Send whenever T is.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API follows the borrow checker's rules with no interior mutability.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
