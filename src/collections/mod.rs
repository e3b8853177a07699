//! Various foundational collection types.
//!
//! # Method
//! Fixed-capacity types ([`ArrayStack`](stack::ArrayStack),
//! [`CircularQueue`](queue::CircularQueue)) report when they are full instead of growing. Growable
//! types double their capacity when they run out of room, and never shrink.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;
