//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::constants::output::CURSOR_MARKER;
use crate::core::{CycleSummary, EditSnapshot};
use crate::error::LinkedCursorError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    show_rounds: bool,
}

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl HumanReportGenerator {
    pub fn new(show_rounds: bool) -> Self {
        Self { show_rounds }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_cycle_report(&self, summary: &CycleSummary) -> Result<String, LinkedCursorError> {
        let mut output = String::new();

        let Some(cycle) = &summary.cycle else {
            write!(
                output,
                "\n{} No cycle: {} {} reach the end of the list.\n",
                style("✅").green().bold(),
                style(summary.values.len()).bold(),
                pluralize("node", summary.values.len())
            )?;
            let mut chain = summary.values.clone();
            chain.push("∅".to_string());
            writeln!(output, "  {} {}", style("→").dim(), chain.join(" → "))?;
            if self.show_rounds {
                writeln!(output, "  {} Race rounds: {}", style("→").dim(), summary.rounds)?;
            }
            return Ok(output);
        };

        write!(
            output,
            "\n{} Found a cycle of {} {}:\n\n",
            style("❌").red().bold(),
            style(cycle.length).red().bold(),
            pluralize("node", cycle.length)
        )?;

        let split = cycle.tail_length.min(summary.values.len());
        let (lead_in, looped) = summary.values.split_at(split);
        let mut chain: Vec<String> = lead_in.to_vec();
        chain.push(format!("[{}]", looped.join(" → ")));
        writeln!(
            output,
            "  {} {} → {}",
            style("🔄").yellow(),
            chain.join(" → "),
            style(&cycle.entry_value).yellow()
        )?;

        writeln!(
            output,
            "  {} Loop entry: {} at index {}",
            style("→").dim(),
            style(&cycle.entry_value).bold(),
            cycle.entry_index
        )?;
        writeln!(
            output,
            "  {} {} before the loop",
            style("→").dim(),
            pluralize_count("node", cycle.tail_length)
        )?;
        if self.show_rounds {
            writeln!(output, "  {} Race rounds: {}", style("→").dim(), summary.rounds)?;
        }

        Ok(output)
    }

    fn generate_edit_report(&self, snapshot: &EditSnapshot) -> Result<String, LinkedCursorError> {
        let mut output = String::new();
        let (before, after) = snapshot.split_at_cursor();

        write!(
            output,
            "\n{} Applied {} {}, text holds {} {}:\n\n",
            style("✏️").cyan(),
            style(snapshot.keys_applied).bold(),
            pluralize("key", snapshot.keys_applied),
            style(snapshot.length).bold(),
            pluralize("character", snapshot.length)
        )?;
        writeln!(
            output,
            "  {}{}{}",
            before,
            style(CURSOR_MARKER).cyan().bold(),
            after
        )?;

        match snapshot.cursor_value {
            Some(value) => writeln!(
                output,
                "\n  {} Cursor after {:?} (position {})",
                style("→").dim(),
                value,
                snapshot.cursor_index
            )?,
            None => writeln!(output, "\n  {} Cursor at the start", style("→").dim())?,
        }

        Ok(output)
    }
}

fn pluralize_count(word: &str, count: usize) -> String {
    format!("{count} {}", pluralize(word, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CycleSpan;

    fn plain(report: String) -> String {
        console::strip_ansi_codes(&report).into_owned()
    }

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_cycle_report() {
        let summary = CycleSummary {
            values: values(&["a", "b"]),
            has_cycle: false,
            rounds: 1,
            cycle: None,
        };

        let report = plain(
            HumanReportGenerator::new(true)
                .generate_cycle_report(&summary)
                .unwrap(),
        );
        assert!(report.contains("No cycle: 2 nodes reach the end"));
        assert!(report.contains("a → b → ∅"));
        assert!(report.contains("Race rounds: 1"));
    }

    #[test]
    fn test_cycle_report() {
        let summary = CycleSummary {
            values: values(&["a", "b", "c", "d"]),
            has_cycle: true,
            rounds: 3,
            cycle: Some(CycleSpan {
                entry_index: 1,
                entry_value: "b".to_string(),
                tail_length: 1,
                length: 3,
            }),
        };

        let report = plain(
            HumanReportGenerator::default()
                .generate_cycle_report(&summary)
                .unwrap(),
        );
        assert!(report.contains("Found a cycle of 3 nodes"));
        assert!(report.contains("a → [b → c → d] → b"));
        assert!(report.contains("Loop entry: b at index 1"));
        assert!(report.contains("1 node before the loop"));
        assert!(!report.contains("Race rounds"));
    }

    #[test]
    fn test_edit_report_marks_cursor() {
        let snapshot = EditSnapshot {
            contents: "abc".to_string(),
            length: 3,
            cursor_index: 2,
            cursor_value: Some('b'),
            keys_applied: 5,
        };

        let report = plain(
            HumanReportGenerator::default()
                .generate_edit_report(&snapshot)
                .unwrap(),
        );
        assert!(report.contains("Applied 5 keys, text holds 3 characters"));
        assert!(report.contains("ab|c"));
        assert!(report.contains("Cursor after 'b' (position 2)"));
    }

    #[test]
    fn test_edit_report_cursor_at_start() {
        let snapshot = EditSnapshot {
            contents: String::new(),
            length: 0,
            cursor_index: 0,
            cursor_value: None,
            keys_applied: 1,
        };

        let report = plain(
            HumanReportGenerator::default()
                .generate_edit_report(&snapshot)
                .unwrap(),
        );
        assert!(report.contains("Applied 1 key, text holds 0 characters"));
        assert!(report.contains("Cursor at the start"));
    }
}
