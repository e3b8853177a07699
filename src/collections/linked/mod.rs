//! Linked collection types. Primarily revolves around [`LinkedList`], which also backs
//! [`LinkedStack`](crate::collections::stack::LinkedStack) and
//! [`LinkedQueue`](crate::collections::queue::LinkedQueue).

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
#[doc(inline)]
pub use crate::util::error::{InvalidPosition, ListError, PredecessorNotFound};
