//! A module containing [`DynamicArray`] and its borrowed iterator.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod iter;

pub use dynamic_array::*;
pub use iter::*;
