//! First-in first-out adapters: [`CircularQueue`] over fixed-capacity ring storage and
//! [`LinkedQueue`] over a [`LinkedList`](crate::collections::linked::LinkedList).

mod circular_queue;
mod linked_queue;
mod tests;

pub use circular_queue::*;
pub use linked_queue::*;
#[doc(inline)]
pub use crate::util::error::{AllocError, QueueEmpty, QueueFull};
