//! # Linked List Module
//!
//! A forward-only singly linked list whose nodes live in an arena of slots.
//!
//! Nodes are addressed by [`NodeId`] handles instead of references. A handle
//! carries the slot index plus a generation counter, so a handle to a removed
//! node resolves to nothing rather than to whatever node reuses the slot.
//! That makes a `NodeId` safe to hold as a non-owning cursor.
//!
//! There are no back references: finding the predecessor of a node is a
//! linear scan with [`LinkedList::find`].
//!
//! ## Example
//!
//! ```
//! use linked_cursor::list::LinkedList;
//!
//! let mut list: LinkedList<char> = "bc".chars().collect();
//! let head = list.insert_at_head('a');
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.value(head), Some(&'a'));
//!
//! // Predecessor lookup: the node whose `next` is the tail
//! let tail = list.tail().unwrap();
//! let before_tail = list.find(|node, _| node.next() == Some(tail));
//! assert_eq!(before_tail.and_then(|id| list.value(id)), Some(&'b'));
//! ```

mod list_impl;

pub use list_impl::*;
