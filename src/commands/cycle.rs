//! Cycle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CycleConfig;
use crate::error::LinkedCursorError;
use crate::fixture::ListFixture;

impl FromCommand for CycleConfig {
    fn from_command(command: Commands) -> Result<Self, LinkedCursorError> {
        match command {
            Commands::Cycle {
                values,
                loop_to,
                file,
                show_rounds,
                error_on_cycle,
                format,
            } => {
                let fixture = match file {
                    Some(path) => ListFixture::parse_file(&path)?,
                    None => ListFixture::new(values, loop_to),
                };

                CycleConfig::builder()
                    .with_fixture(fixture)
                    .with_format(format.format)
                    .with_show_rounds(show_rounds)
                    .with_error_on_cycle(error_on_cycle)
                    .build()
            }
            _ => Err(LinkedCursorError::ConfigurationError {
                message: "Invalid command type for CycleConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CycleConfig);

/// Execute the cycle command, running Floyd's detector over the list
pub fn execute_cycle_command(command: Commands) -> Result<()> {
    let config = CycleConfig::from_command(command)
        .wrap_err("Failed to parse cycle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::cycle::CycleExecutor;
    CycleExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::FormatArgs;

    fn cycle_command(
        values: Vec<String>,
        loop_to: Option<usize>,
        file: Option<std::path::PathBuf>,
    ) -> Commands {
        Commands::Cycle {
            values,
            loop_to,
            file,
            show_rounds: false,
            error_on_cycle: true,
            format: FormatArgs {
                format: OutputFormat::Human,
            },
        }
    }

    #[test]
    fn test_from_inline_values() {
        let command = cycle_command(vec!["a".to_string(), "b".to_string()], Some(0), None);
        let config = CycleConfig::try_from(command).unwrap();

        assert_eq!(config.fixture.values, vec!["a", "b"]);
        assert_eq!(config.fixture.loop_to, Some(0));
        assert!(config.error_on_cycle);
    }

    #[test]
    fn test_from_fixture_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "values = [\"p\", \"q\"]").unwrap();

        let command = cycle_command(vec![], None, Some(file.path().to_path_buf()));
        let config = CycleConfig::from_command(command).unwrap();

        assert_eq!(config.fixture.values, vec!["p", "q"]);
        assert_eq!(config.fixture.loop_to, None);
    }

    #[test]
    fn test_out_of_range_loop_rejected() {
        let command = cycle_command(vec!["a".to_string()], Some(3), None);
        assert!(CycleConfig::from_command(command).is_err());
    }
}
