//! Keystroke scripts for the `edit` command
//!
//! A script is typed text with key tokens mixed in. Plain characters are
//! inserted, `{left}`, `{right}` and `{del}` press the matching key, and
//! `{{` / `}}` insert literal braces.
//!
//! ```
//! use linked_cursor::editor::Key;
//! use linked_cursor::script::parse_script;
//!
//! let keys = parse_script("ab{left}{del}").unwrap();
//! assert_eq!(
//!     keys,
//!     vec![Key::Insert('a'), Key::Insert('b'), Key::ArrowLeft, Key::Delete]
//! );
//! ```

use std::ops::Range;

use miette::NamedSource;

use crate::constants::script::SOURCE_NAME;
use crate::editor::Key;
use crate::error::{LinkedCursorError, ScriptParseError};

/// Parse `script` into the keys it presses
pub fn parse_script(script: &str) -> Result<Vec<Key>, LinkedCursorError> {
    let mut keys = Vec::with_capacity(script.len());
    let mut chars = script.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    keys.push(Key::Insert('{'));
                    continue;
                }

                let mut name = String::new();
                let mut end = None;
                for (index, next) in chars.by_ref() {
                    if next == '}' {
                        end = Some(index + 1);
                        break;
                    }
                    name.push(next);
                }

                let Some(end) = end else {
                    return Err(script_error(
                        script,
                        start..script.len(),
                        "unterminated key token".to_string(),
                    ));
                };
                let key = named_key(&name).ok_or_else(|| {
                    script_error(script, start..end, format!("unknown key `{{{name}}}`"))
                })?;
                keys.push(key);
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(script_error(
                        script,
                        start..start + 1,
                        "unmatched `}`".to_string(),
                    ));
                }
                keys.push(Key::Insert('}'));
            }
            other => keys.push(Key::Insert(other)),
        }
    }

    Ok(keys)
}

fn named_key(name: &str) -> Option<Key> {
    match name.trim().to_ascii_lowercase().as_str() {
        "left" | "l" => Some(Key::ArrowLeft),
        "right" | "r" => Some(Key::ArrowRight),
        "del" | "delete" | "bs" | "backspace" => Some(Key::Delete),
        _ => None,
    }
}

fn script_error(script: &str, span: Range<usize>, reason: String) -> LinkedCursorError {
    LinkedCursorError::ScriptParseError(Box::new(ScriptParseError {
        reason,
        source_code: NamedSource::new(SOURCE_NAME, script.to_string()),
        span: span.into(),
    }))
}
