//! # Cycle Detection Module
//!
//! This module detects loops in forward-only linked structures.
//!
//! ## Algorithm
//!
//! We use Floyd's tortoise and hare. Two cursors start at the head; the slow
//! one advances one link per round and the fast one two. On a finite chain
//! the fast cursor falls off the end. On a looped chain both cursors end up
//! inside the loop, where the fast one gains exactly one link per round, so
//! they meet within one lap. O(n) time, O(1) extra space: no visited set.
//!
//! [`find_cycle`] continues past the meeting point to locate where the loop
//! starts and how long it is, still without extra storage.
//!
//! ## Key Components
//!
//! - **ForwardLinks**: anything with a head and a `next` step
//! - **has_cycle** / **find_cycle**: stateless checks
//! - **CycleDetector**: keeps the last result around for reporting
//!
//! ## Example
//!
//! ```
//! use linked_cursor::detector::{CycleDetector, has_cycle};
//! use linked_cursor::list::LinkedList;
//!
//! let mut list = LinkedList::from_values(['a', 'b', 'c', 'd']);
//! assert!(!has_cycle(&list));
//!
//! // Point the tail back at 'b'
//! let tail = list.tail().unwrap();
//! let b = list.next(list.head().unwrap()).unwrap();
//! list.set_next(tail, Some(b));
//!
//! let mut detector = CycleDetector::new();
//! assert!(detector.detect(&list));
//!
//! let cycle = detector.cycle().unwrap();
//! assert_eq!(cycle.tail_length(), 1);
//! assert_eq!(cycle.length(), 3);
//! ```

mod detector_impl;

pub use detector_impl::*;
