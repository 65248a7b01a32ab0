//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - github: GitHub Actions workflow commands for CI annotations

pub mod github;
pub mod human;
pub mod json;

use crate::core::{CycleSummary, EditSnapshot};
use crate::error::LinkedCursorError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a cycle detection run
    fn generate_cycle_report(&self, summary: &CycleSummary) -> Result<String, LinkedCursorError>;

    /// Generate a report from an editor session
    fn generate_edit_report(&self, snapshot: &EditSnapshot) -> Result<String, LinkedCursorError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
