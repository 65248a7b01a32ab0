//! Core type definitions
//!
//! Plain, serializable views of an editor session and a detector run. The
//! reports only ever see these, never the live structures.

use serde::Serialize;

use crate::detector::CycleDetector;
use crate::editor::Editor;
use crate::list::LinkedList;

/// State of an editor after a key script ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditSnapshot {
    pub contents: String,
    pub length: usize,
    /// Characters to the left of the cursor gap
    pub cursor_index: usize,
    /// Character the cursor sits on, `None` before the first one
    pub cursor_value: Option<char>,
    pub keys_applied: usize,
}

impl EditSnapshot {
    pub fn capture(editor: &Editor, keys_applied: usize) -> Self {
        Self {
            contents: editor.contents(),
            length: editor.len(),
            cursor_index: editor.cursor_index(),
            cursor_value: editor.cursor_value().copied(),
            keys_applied,
        }
    }

    /// Contents split at the cursor gap
    pub fn split_at_cursor(&self) -> (&str, &str) {
        let offset = self
            .contents
            .char_indices()
            .nth(self.cursor_index)
            .map_or(self.contents.len(), |(offset, _)| offset);
        self.contents.split_at(offset)
    }
}

/// Where a detected loop sits in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleSpan {
    pub entry_index: usize,
    pub entry_value: String,
    pub tail_length: usize,
    pub length: usize,
}

/// Outcome of running the detector over a list of values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub values: Vec<String>,
    pub has_cycle: bool,
    pub rounds: usize,
    pub cycle: Option<CycleSpan>,
}

impl CycleSummary {
    pub fn capture(list: &LinkedList<String>, detector: &CycleDetector) -> Self {
        let cycle = detector.cycle().map(|cycle| CycleSpan {
            entry_index: cycle.tail_length(),
            entry_value: list.value(cycle.entry()).cloned().unwrap_or_default(),
            tail_length: cycle.tail_length(),
            length: cycle.length(),
        });

        Self {
            values: list.iter().cloned().collect(),
            has_cycle: detector.has_cycle(),
            rounds: detector.rounds(),
            cycle,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_edit_snapshot_capture() {
        let mut editor = Editor::new();
        editor.insert('a').insert('b').insert('c').arrow_left();

        let snapshot = EditSnapshot::capture(&editor, 4);
        assert_eq!(
            snapshot,
            EditSnapshot {
                contents: "abc".to_string(),
                length: 3,
                cursor_index: 2,
                cursor_value: Some('b'),
                keys_applied: 4,
            }
        );
        assert_eq!(snapshot.split_at_cursor(), ("ab", "c"));
    }

    #[test]
    fn test_split_at_cursor_boundaries() {
        let mut editor = Editor::with_text("ñu".chars().collect());
        assert_eq!(
            EditSnapshot::capture(&editor, 0).split_at_cursor(),
            ("ñu", "")
        );

        editor.arrow_left().arrow_left();
        assert_eq!(
            EditSnapshot::capture(&editor, 2).split_at_cursor(),
            ("", "ñu")
        );

        editor.arrow_right();
        assert_eq!(
            EditSnapshot::capture(&editor, 3).split_at_cursor(),
            ("ñ", "u")
        );
    }

    #[test]
    fn test_cycle_summary_capture() {
        let mut list = LinkedList::from_values(["a", "b", "c"].map(String::from));
        let head = list.head().unwrap();
        let tail = list.tail().unwrap();
        list.set_next(tail, Some(head));

        let mut detector = CycleDetector::new();
        detector.detect(&list);

        let summary = CycleSummary::capture(&list, &detector);
        assert!(summary.has_cycle);
        assert_eq!(summary.values, vec!["a", "b", "c"]);
        assert_eq!(
            summary.cycle,
            Some(CycleSpan {
                entry_index: 0,
                entry_value: "a".to_string(),
                tail_length: 0,
                length: 3,
            })
        );
    }

    #[test]
    fn test_cycle_summary_without_cycle() {
        let list = LinkedList::from_values(["a"].map(String::from));
        let mut detector = CycleDetector::new();
        detector.detect(&list);

        let summary = CycleSummary::capture(&list, &detector);
        assert!(!summary.has_cycle);
        assert_eq!(summary.cycle, None);
        assert_eq!(summary.rounds, 0);
    }
}
