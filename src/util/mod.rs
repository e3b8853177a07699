#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod fmt;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod panic;
pub mod result;
