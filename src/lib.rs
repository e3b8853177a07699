//! A small library of foundational in-memory collections, written around manual storage
//! management: a growable array, a singly linked list, array- and list-backed stacks, a circular
//! queue and a linked queue, and two hash tables (separate chaining and open addressing).
//!
//! # Purpose
//! The interesting part of each type here is the bookkeeping rather than the API: capacity growth,
//! index and link maintenance under mutation, collision resolution and load-factor driven
//! rehashing. Every type keeps those invariants internally and only exposes operations that leave
//! it consistent.
//!
//! # Storage
//! All contiguous types share [`Array`](collections::contiguous::Array), a fixed-size heap
//! allocation that can only be resized through fallible reallocation. Growth, stack and queue
//! slots, and hash table buckets all go through it, so there is exactly one place that allocates
//! and frees contiguous memory.
//!
//! # Error Handling
//! Operations return strongly typed errors rather than aborting. Each error kind is its own small
//! struct implementing [`Error`](std::error::Error), and operations that can fail in more than one
//! way return an enum over those structs, so matching on a failure is static rather than dynamic.
//! Whether a failure is fatal is left to the caller. The indexing operators are the exception:
//! they panic with the error's message, the same way slices do.
//!
//! # Logging
//! Growth events, probe exhaustion and the circular queue's empty dequeue are reported through the
//! [`log`] facade. No logger is installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
