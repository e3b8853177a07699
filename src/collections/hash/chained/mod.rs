//! A hash table which resolves collisions by chaining entries within each bucket.

mod chained_hash_map;
mod iter;
mod tests;

pub use chained_hash_map::*;
pub use iter::*;
