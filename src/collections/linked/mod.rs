//! Node based collections. [`ForwardList`] is a singly linked list whose nodes are each owned by
//! their predecessor, edited in place through [`CursorMut`].

pub mod forward_list;

#[doc(inline)]
pub use forward_list::{CursorMut, ForwardList};
