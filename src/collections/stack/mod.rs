//! Last-in first-out adapters: [`ArrayStack`] over fixed-capacity [`Array`] storage and
//! [`LinkedStack`] over a [`LinkedList`].
//!
//! [`Array`]: crate::collections::contiguous::Array
//! [`LinkedList`]: crate::collections::linked::LinkedList

mod array_stack;
mod linked_stack;

pub use array_stack::*;
pub use linked_stack::*;
#[doc(inline)]
pub use crate::util::error::{AllocError, StackEmpty, StackFull};
