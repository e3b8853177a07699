//! Contiguous collection types. [`Array`] is the raw storage abstraction, [`DynamicArray`] builds a
//! growable sequence on top of it.

pub mod array;
pub mod dynamic_array;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
