//! List fixtures for the `cycle` command
//!
//! A fixture is a list of values plus an optional index the tail links back
//! to. It can come straight from the command line or from a TOML file:
//!
//! ```toml
//! values = ["a", "b", "c", "d"]
//! loop_to = 1
//! ```

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use tracing::debug;

use crate::error::{FixtureParseError, LinkedCursorError};
use crate::list::LinkedList;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListFixture {
    pub values: Vec<String>,
    #[serde(default)]
    pub loop_to: Option<usize>,
}

impl ListFixture {
    pub fn new(values: Vec<String>, loop_to: Option<usize>) -> Self {
        Self { values, loop_to }
    }

    pub fn parse_file(path: &Path) -> Result<Self, LinkedCursorError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LinkedCursorError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), &content)
    }

    pub fn parse_str(name: &str, content: &str) -> Result<Self, LinkedCursorError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            LinkedCursorError::FixtureParseError(Box::new(FixtureParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Check that `loop_to` points at an existing node
    pub fn validate(&self) -> Result<(), LinkedCursorError> {
        match self.loop_to {
            Some(_) if self.values.is_empty() => Err(LinkedCursorError::ConfigurationError {
                message: "loop_to needs at least one value to link back to".to_string(),
            }),
            Some(index) if index >= self.values.len() => {
                Err(LinkedCursorError::ConfigurationError {
                    message: format!(
                        "loop_to index {index} is out of range for {} values",
                        self.values.len()
                    ),
                })
            }
            _ => Ok(()),
        }
    }

    /// Build the list, linking the tail back to `loop_to` when set
    pub fn build(&self) -> Result<LinkedList<String>, LinkedCursorError> {
        self.validate()?;

        let mut list = LinkedList::from_values(self.values.iter().cloned());
        if let Some(index) = self.loop_to {
            let target = list.find(|_, position| position == index);
            if let Some(tail) = list.tail() {
                list.set_next(tail, target);
            }
            debug!(loop_to = index, len = list.len(), "linked tail back");
        }

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::detector::{find_cycle, has_cycle};

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_str() {
        let content = "values = [\"a\", \"b\"]\nloop_to = 0\n";
        let fixture = ListFixture::parse_str("inline", content).unwrap();
        assert_eq!(fixture, ListFixture::new(values(&["a", "b"]), Some(0)));
    }

    #[test]
    fn test_parse_without_loop() {
        let fixture = ListFixture::parse_str("inline", "values = []").unwrap();
        assert_eq!(fixture.loop_to, None);
        assert!(fixture.values.is_empty());
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "values = [\"x\", \"y\", \"z\"]").unwrap();
        writeln!(file, "loop_to = 2").unwrap();

        let fixture = ListFixture::parse_file(file.path()).unwrap();
        assert_eq!(fixture.values, values(&["x", "y", "z"]));
        assert_eq!(fixture.loop_to, Some(2));
    }

    #[test]
    fn test_missing_file() {
        let err = ListFixture::parse_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, LinkedCursorError::FileReadError { .. }));
    }

    #[test]
    fn test_invalid_toml_has_span() {
        let err = ListFixture::parse_str("bad.toml", "values = [\"a\"").unwrap_err();
        match err {
            LinkedCursorError::FixtureParseError(e) => {
                assert_eq!(e.file, "bad.toml");
                assert!(e.span.is_some());
            }
            other => panic!("Expected FixtureParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ListFixture::parse_str("extra.toml", "values = []\nloop = 1").unwrap_err();
        assert!(matches!(err, LinkedCursorError::FixtureParseError(_)));
    }

    #[test]
    fn test_build_acyclic() {
        let list = ListFixture::new(values(&["a", "b", "c"]), None)
            .build()
            .unwrap();
        assert_eq!(list.len(), 3);
        assert!(!has_cycle(&list));
    }

    #[test]
    fn test_build_looped() {
        let list = ListFixture::new(values(&["a", "b", "c", "d"]), Some(1))
            .build()
            .unwrap();

        let cycle = find_cycle(&list).unwrap();
        assert_eq!(list.value(cycle.entry()).map(String::as_str), Some("b"));
        assert_eq!(cycle.tail_length(), 1);
        assert_eq!(cycle.length(), 3);
    }

    #[test]
    fn test_loop_out_of_range() {
        let err = ListFixture::new(values(&["a"]), Some(1))
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: loop_to index 1 is out of range for 1 values"
        );
    }

    #[test]
    fn test_loop_on_empty_list() {
        let err = ListFixture::new(vec![], Some(0)).validate().unwrap_err();
        assert!(matches!(err, LinkedCursorError::ConfigurationError { .. }));
    }
}
