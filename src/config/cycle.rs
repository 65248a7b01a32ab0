//! Cycle command configuration

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::fixture::ListFixture;

/// Configuration for the cycle command
///
/// Holds the list to race over, already resolved from the command line or a
/// fixture file.
#[derive(Debug, Clone)]
pub struct CycleConfig {
    /// List values and optional loop target
    pub fixture: ListFixture,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to include race rounds in human output
    pub show_rounds: bool,
    /// Whether to exit with error code if a cycle is found
    pub error_on_cycle: bool,
}

impl CycleConfig {
    pub fn builder() -> CycleConfigBuilder {
        CycleConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CycleConfigBuilder {
    fixture: Option<ListFixture>,
    format: Option<OutputFormat>,
    show_rounds: Option<bool>,
    error_on_cycle: Option<bool>,
}

impl CycleConfigBuilder {
    pub fn new() -> Self {
        Self {
            fixture: None,
            format: None,
            show_rounds: None,
            error_on_cycle: None,
        }
    }

    pub fn with_fixture(mut self, fixture: ListFixture) -> Self {
        self.fixture = Some(fixture);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_show_rounds(mut self, show_rounds: bool) -> Self {
        self.show_rounds = Some(show_rounds);
        self
    }

    pub fn with_error_on_cycle(mut self, error_on_cycle: bool) -> Self {
        self.error_on_cycle = Some(error_on_cycle);
        self
    }
}

impl crate::common::ConfigBuilder for CycleConfigBuilder {
    type Config = CycleConfig;

    fn build(self) -> Result<Self::Config, crate::error::LinkedCursorError> {
        let fixture = self.fixture.ok_or_else(|| missing_field("fixture"))?;
        fixture.validate()?;

        Ok(CycleConfig {
            fixture,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            show_rounds: self
                .show_rounds
                .ok_or_else(|| missing_field("show_rounds"))?,
            error_on_cycle: self
                .error_on_cycle
                .ok_or_else(|| missing_field("error_on_cycle"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::LinkedCursorError;

    fn builder(loop_to: Option<usize>) -> CycleConfigBuilder {
        CycleConfig::builder()
            .with_fixture(ListFixture::new(
                vec!["a".to_string(), "b".to_string()],
                loop_to,
            ))
            .with_format(OutputFormat::Human)
            .with_show_rounds(false)
    }

    #[test]
    fn test_build() {
        let config = builder(Some(1)).with_error_on_cycle(true).build().unwrap();
        assert_eq!(config.fixture.loop_to, Some(1));
        assert!(config.error_on_cycle);
    }

    #[test]
    fn test_build_requires_error_on_cycle() {
        let err = builder(None).build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: error_on_cycle"
        );
    }

    #[test]
    fn test_build_rejects_bad_loop_target() {
        let err = builder(Some(5))
            .with_error_on_cycle(false)
            .build()
            .unwrap_err();
        assert!(matches!(err, LinkedCursorError::ConfigurationError { .. }));
    }
}
