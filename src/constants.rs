//! Configuration constants for linked-cursor
//!
//! Defaults shared by the CLI, the reports and the logging setup. Most of
//! them can be overridden through the matching `LINKED_CURSOR_*`
//! environment variables.

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Drawn at the cursor gap in human reports
    pub const CURSOR_MARKER: char = '|';
}

/// Key script configuration
pub mod script {
    /// Name shown above script diagnostics
    pub const SOURCE_NAME: &str = "script";
}

/// Diagnostic logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter
    pub const FILTER_ENV: &str = "LINKED_CURSOR_LOG";

    /// Filter used when the variable is unset or invalid
    pub const DEFAULT_FILTER: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::CURSOR_MARKER, '|');
    }

    #[test]
    fn test_logging_constants() {
        assert_eq!(logging::FILTER_ENV, "LINKED_CURSOR_LOG");
        assert_eq!(logging::DEFAULT_FILTER, "warn");
    }
}
