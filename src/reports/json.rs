//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::{CycleSummary, EditSnapshot};
use crate::error::LinkedCursorError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_cycle_report(&self, summary: &CycleSummary) -> Result<String, LinkedCursorError> {
        let report = json!({
            "has_cycle": summary.has_cycle,
            "node_count": summary.values.len(),
            "values": summary.values,
            "rounds": summary.rounds,
            "cycle": summary.cycle,
        });

        serde_json::to_string_pretty(&report).map_err(LinkedCursorError::Json)
    }

    fn generate_edit_report(&self, snapshot: &EditSnapshot) -> Result<String, LinkedCursorError> {
        serde_json::to_string_pretty(snapshot).map_err(LinkedCursorError::Json)
    }
}
