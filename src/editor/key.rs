//! Keystrokes understood by the editor

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<T = char> {
    Insert(T),
    Delete,
    ArrowLeft,
    ArrowRight,
}
