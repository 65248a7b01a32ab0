//! Edit command configuration

use crate::cli::OutputFormat;
use crate::common::missing_field;

/// Configuration for the edit command
#[derive(Debug, Clone)]
pub struct EditConfig {
    /// Text the editor starts with, cursor placed after it
    pub text: String,
    /// Key script replayed against the editor
    pub script: String,
    /// Output format for the report
    pub format: OutputFormat,
}

impl EditConfig {
    pub fn builder() -> EditConfigBuilder {
        EditConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct EditConfigBuilder {
    text: Option<String>,
    script: Option<String>,
    format: Option<OutputFormat>,
}

impl EditConfigBuilder {
    pub fn new() -> Self {
        Self {
            text: None,
            script: None,
            format: None,
        }
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_script(mut self, script: String) -> Self {
        self.script = Some(script);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for EditConfigBuilder {
    type Config = EditConfig;

    fn build(self) -> Result<Self::Config, crate::error::LinkedCursorError> {
        Ok(EditConfig {
            // An editor may start empty
            text: self.text.unwrap_or_default(),
            script: self.script.ok_or_else(|| missing_field("script"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_build_defaults_text() {
        let config = EditConfig::builder()
            .with_script("abc".to_string())
            .with_format(OutputFormat::Json)
            .build()
            .unwrap();

        assert_eq!(config.text, "");
        assert_eq!(config.script, "abc");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_build_requires_script() {
        let err = EditConfig::builder()
            .with_format(OutputFormat::Human)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: script"
        );
    }
}
