//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::core::{CycleSummary, EditSnapshot};
use crate::error::LinkedCursorError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_cycle_report(&self, summary: &CycleSummary) -> Result<String, LinkedCursorError> {
        let mut output = String::new();

        let Some(cycle) = &summary.cycle else {
            writeln!(
                output,
                "::notice title=Cycle Check::No cycle in {} {} ✅",
                summary.values.len(),
                pluralize("node", summary.values.len())
            )?;
            return Ok(output);
        };

        writeln!(
            output,
            "::error title=Cycle Check::Found a cycle of {} {} entered at index {} ({})",
            cycle.length,
            pluralize("node", cycle.length),
            cycle.entry_index,
            cycle.entry_value
        )?;

        Ok(output)
    }

    fn generate_edit_report(&self, snapshot: &EditSnapshot) -> Result<String, LinkedCursorError> {
        let mut output = String::new();
        writeln!(
            output,
            "::notice title=Editor::{} {}, cursor at position {}",
            snapshot.length,
            pluralize("character", snapshot.length),
            snapshot.cursor_index
        )?;
        Ok(output)
    }
}
