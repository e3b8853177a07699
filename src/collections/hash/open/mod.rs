//! A hash table which resolves collisions by probing for another slot in the same array.

mod iter;
mod open_hash_map;
mod probe;
mod slot;

pub use iter::*;
pub use open_hash_map::*;
pub(crate) use probe::*;
pub use slot::*;
