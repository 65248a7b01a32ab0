//! Edit command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::EditConfig;
use crate::error::LinkedCursorError;

impl FromCommand for EditConfig {
    fn from_command(command: Commands) -> Result<Self, LinkedCursorError> {
        match command {
            Commands::Edit {
                script,
                text,
                format,
            } => EditConfig::builder()
                .with_text(text)
                .with_script(script)
                .with_format(format.format)
                .build(),
            _ => Err(LinkedCursorError::ConfigurationError {
                message: "Invalid command type for EditConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(EditConfig);

/// Execute the edit command, replaying a key script against the editor
pub fn execute_edit_command(command: Commands) -> Result<()> {
    let config = EditConfig::from_command(command)
        .wrap_err("Failed to parse edit command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::edit::EditExecutor;
    EditExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::FormatArgs;

    #[test]
    fn test_try_from_edit_command() {
        let command = Commands::Edit {
            script: "x{left}".to_string(),
            text: "ab".to_string(),
            format: FormatArgs {
                format: OutputFormat::Json,
            },
        };

        let config = EditConfig::try_from(command).unwrap();
        assert_eq!(config.script, "x{left}");
        assert_eq!(config.text, "ab");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_wrong_command_rejected() {
        let command = Commands::Cycle {
            values: vec![],
            loop_to: None,
            file: None,
            show_rounds: false,
            error_on_cycle: false,
            format: FormatArgs {
                format: OutputFormat::Human,
            },
        };

        assert!(EditConfig::from_command(command).is_err());
    }
}
