//! Hash tables with two collision resolution strategies.
//!
//! [`ChainedHashMap`] keeps a chain of entries per bucket and rehashes into twice as many buckets
//! once its load factor reaches the configured threshold (0.65 by default). [`OpenHashMap`] stores
//! entries directly in a prime-sized array of slots, probing past collisions and marking removed
//! entries with tombstones, and grows at a lower threshold (0.45 by default).
//!
//! Both tables are generic over a [`BuildHasher`](std::hash::BuildHasher) and default to
//! [`PolynomialState`], a deterministic polynomial hash over the key's bytes.

pub mod chained;
pub mod config;
pub mod hasher;
pub mod open;
pub mod prime;

#[doc(inline)]
pub use chained::ChainedHashMap;
#[doc(inline)]
pub use config::{OpenTableConfig, Probe, TableConfig};
#[doc(inline)]
pub use hasher::{ByteSumState, PolynomialState};
#[doc(inline)]
pub use open::OpenHashMap;
#[doc(inline)]
pub use crate::util::error::{AllocError, InvalidLoadFactor, TableError};
