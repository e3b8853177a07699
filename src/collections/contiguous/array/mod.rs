//! A module containing [`Array`], the fixed-size storage shared by every contiguous and hashed
//! collection in this crate.

mod array;

pub use array::*;
