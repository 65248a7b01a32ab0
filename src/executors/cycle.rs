//! Cycle command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CycleConfig;
use crate::core::CycleSummary;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};
use crate::utils::string::pluralize;

pub struct CycleExecutor;

impl CycleExecutor {
    /// Build the fixture list and race over it
    pub fn run(config: &CycleConfig) -> Result<CycleSummary> {
        let list = config
            .fixture
            .build()
            .wrap_err("Failed to build list from fixture")?;

        let mut detector = CycleDetector::new();
        detector.detect(&list);

        Ok(CycleSummary::capture(&list, &detector))
    }
}

impl CommandExecutor for CycleExecutor {
    type Config = CycleConfig;

    fn execute(config: Self::Config) -> Result<()> {
        if config.format == OutputFormat::Human {
            let count = config.fixture.values.len();
            eprintln!(
                "{} Racing the tortoise and the hare over {} {}...",
                style("🔗").cyan(),
                style(count).bold(),
                pluralize("node", count)
            );
            if let Some(index) = config.fixture.loop_to {
                eprintln!(
                    "  {} Tail links back to index {}",
                    style("→").dim(),
                    style(index).yellow()
                );
            }
        }

        let summary = Self::run(&config)?;

        let report_result = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.show_rounds).generate_cycle_report(&summary)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_cycle_report(&summary),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_cycle_report(&summary),
        };

        let report = report_result
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        // Exit with error code if a cycle was found and requested
        if config.error_on_cycle && summary.has_cycle {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::fixture::ListFixture;

    fn config(values: &[&str], loop_to: Option<usize>) -> CycleConfig {
        CycleConfig::builder()
            .with_fixture(ListFixture::new(
                values.iter().map(|s| s.to_string()).collect(),
                loop_to,
            ))
            .with_format(OutputFormat::Json)
            .with_show_rounds(false)
            .with_error_on_cycle(false)
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_without_loop() {
        let summary = CycleExecutor::run(&config(&["a", "b", "c"], None)).unwrap();
        assert!(!summary.has_cycle);
        assert_eq!(summary.values.len(), 3);
    }

    #[test]
    fn test_run_with_loop() {
        let summary = CycleExecutor::run(&config(&["a", "b", "c"], Some(2))).unwrap();
        assert!(summary.has_cycle);

        let cycle = summary.cycle.unwrap();
        assert_eq!(cycle.entry_value, "c");
        assert_eq!(cycle.length, 1);
    }

    #[test]
    fn test_run_empty_list() {
        let summary = CycleExecutor::run(&config(&[], None)).unwrap();
        assert!(!summary.has_cycle);
        assert_eq!(summary.rounds, 0);
    }
}
