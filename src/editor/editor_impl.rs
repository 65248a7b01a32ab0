use tracing::trace;

use super::Key;
use crate::list::{LinkedList, NodeId};

/// Cursor-based editor over a singly linked list
///
/// `cursor` is either `None` (before the first value) or a handle to a node
/// that is currently reachable from the head of `text`. Every operation keeps
/// it that way before returning.
#[derive(Debug, Clone)]
pub struct Editor<T = char> {
    text: LinkedList<T>,
    cursor: Option<NodeId>,
}

impl<T> Default for Editor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<LinkedList<T>> for Editor<T> {
    fn from(text: LinkedList<T>) -> Self {
        Self::with_text(text)
    }
}

impl<T> Editor<T> {
    /// Create an editor with no text
    pub fn new() -> Self {
        Self::with_text(LinkedList::new())
    }

    /// Create an editor over `text` with the cursor after its last value
    pub fn with_text(text: LinkedList<T>) -> Self {
        let last = text.len().checked_sub(1);
        let cursor = text.find(|_, index| Some(index) == last);
        Self { text, cursor }
    }

    /// Insert `value` after the cursor and move the cursor onto it
    pub fn insert(&mut self, value: T) -> &mut Self {
        match self.cursor {
            Some(cursor) if !self.text.is_empty() => {
                if let Some(inserted) = self.text.insert(value, |node, _| node.id() == cursor) {
                    self.cursor = Some(inserted);
                }
            }
            _ => {
                self.cursor = Some(self.text.insert_at_head(value));
            }
        }
        trace!(cursor = ?self.cursor, len = self.text.len(), "insert");
        self
    }

    /// Remove the value under the cursor and move the cursor back one
    ///
    /// Does nothing on an empty editor or when the cursor is before the
    /// first value.
    pub fn delete(&mut self) -> &mut Self {
        if self.text.is_empty() {
            return self;
        }
        let Some(cursor) = self.cursor else {
            return self;
        };

        if self.text.head() == Some(cursor) {
            self.text.remove_head();
            self.cursor = None;
        } else if let Some(previous) = self.predecessor(cursor) {
            self.text.remove_after(previous);
            self.cursor = Some(previous);
        }
        trace!(cursor = ?self.cursor, len = self.text.len(), "delete");
        self
    }

    /// Move the cursor one position toward the start
    pub fn arrow_left(&mut self) -> &mut Self {
        let Some(cursor) = self.cursor else {
            return self;
        };

        if self.text.head() == Some(cursor) {
            self.cursor = None;
        } else if let Some(previous) = self.predecessor(cursor) {
            self.cursor = Some(previous);
        }
        trace!(cursor = ?self.cursor, "arrow left");
        self
    }

    /// Move the cursor one position toward the end
    pub fn arrow_right(&mut self) -> &mut Self {
        match self.cursor {
            None => self.cursor = self.text.head(),
            Some(cursor) => {
                if let Some(next) = self.text.next(cursor) {
                    self.cursor = Some(next);
                }
            }
        }
        trace!(cursor = ?self.cursor, "arrow right");
        self
    }

    /// Dispatch a single keystroke
    pub fn apply(&mut self, key: Key<T>) -> &mut Self {
        match key {
            Key::Insert(value) => self.insert(value),
            Key::Delete => self.delete(),
            Key::ArrowLeft => self.arrow_left(),
            Key::ArrowRight => self.arrow_right(),
        }
    }

    fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.text
            .find(|candidate, _| candidate.next() == Some(node))
    }

    pub fn text(&self) -> &LinkedList<T> {
        &self.text
    }

    pub fn into_text(self) -> LinkedList<T> {
        self.text
    }

    pub fn cursor(&self) -> Option<NodeId> {
        self.cursor
    }

    /// Value the cursor sits on
    pub fn cursor_value(&self) -> Option<&T> {
        self.cursor.and_then(|cursor| self.text.value(cursor))
    }

    /// Number of values to the left of the cursor gap
    pub fn cursor_index(&self) -> usize {
        self.cursor
            .and_then(|cursor| self.text.position(cursor))
            .map_or(0, |position| position + 1)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn values(&self) -> Vec<&T> {
        self.text.values()
    }
}

impl Editor<char> {
    /// Text as a string
    pub fn contents(&self) -> String {
        self.text.iter().collect()
    }
}
