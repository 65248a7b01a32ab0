//! # Editor Module
//!
//! A text editor over a [`LinkedList`](crate::list::LinkedList) with a
//! movable cursor.
//!
//! The cursor marks a gap. `None` is the gap before the first value;
//! `Some(node)` is the gap right after `node`. Typing inserts after the
//! cursor and moves onto the new value, delete removes the value the cursor
//! sits on and steps back. Nodes have no back links, so stepping back is a
//! linear predecessor scan.
//!
//! Every operation returns `&mut Self` so calls chain:
//!
//! ```
//! use linked_cursor::editor::Editor;
//!
//! let mut editor = Editor::new();
//! editor.insert('a').insert('b').insert('c');
//! assert_eq!(editor.contents(), "abc");
//!
//! editor.arrow_left().arrow_left().delete();
//! assert_eq!(editor.contents(), "bc");
//! assert_eq!(editor.cursor(), None);
//! ```
//!
//! The list handed to an editor must not be cyclic.

mod editor_impl;
mod key;

pub use editor_impl::*;
pub use key::Key;
