//! Edit command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::EditConfig;
use crate::core::EditSnapshot;
use crate::editor::Editor;
use crate::executors::CommandExecutor;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};
use crate::script::parse_script;

pub struct EditExecutor;

impl EditExecutor {
    /// Replay the configured script and capture the result
    pub fn run(config: &EditConfig) -> Result<EditSnapshot> {
        let keys = parse_script(&config.script)?;
        debug!(
            keys = keys.len(),
            text_len = config.text.chars().count(),
            "replaying script"
        );

        let mut editor = Editor::with_text(config.text.chars().collect());
        for key in &keys {
            editor.apply(*key);
        }

        Ok(EditSnapshot::capture(&editor, keys.len()))
    }
}

impl CommandExecutor for EditExecutor {
    type Config = EditConfig;

    fn execute(config: Self::Config) -> Result<()> {
        if config.format == OutputFormat::Human {
            eprintln!(
                "{} Replaying {} over {:?}...",
                style("🔗").cyan(),
                style(&config.script).bold(),
                config.text
            );
        }

        let snapshot = Self::run(&config).wrap_err("Failed to replay key script")?;

        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::default().generate_edit_report(&snapshot),
            OutputFormat::Json => JsonReportGenerator::new().generate_edit_report(&snapshot),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_edit_report(&snapshot),
        };

        let report = report_result
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        Ok(())
    }
}
