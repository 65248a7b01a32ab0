use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::FormatArgs;

#[derive(Parser)]
#[command(
    name = "linked-cursor",
    about = "🔗 Cursor editing and cycle detection on singly linked lists",
    long_about = "linked-cursor drives two small engines built on a forward-only linked list: an \
                  editor that keeps a movable cursor between characters, and Floyd's tortoise \
                  and hare cycle detector.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type a key script into the linked-list editor
    ///
    /// Plain characters are inserted after the cursor. `{left}`, `{right}`
    /// and `{del}` move the cursor or delete the character under it, and
    /// `{{` / `}}` type literal braces.
    #[command(
        long_about = "Replay a key script against an editor whose text is stored one character \
                      per linked-list node. The cursor starts after the initial text. Inserting \
                      places the character after the cursor; delete removes the character the \
                      cursor sits on and steps back; arrows move between characters. The final \
                      text and cursor position are reported."
    )]
    Edit {
        /// Key script to replay
        #[arg(value_name = "SCRIPT", env = "LINKED_CURSOR_SCRIPT")]
        script: String,

        /// Text the editor starts with
        #[arg(long, default_value = "", env = "LINKED_CURSOR_TEXT")]
        text: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Race the tortoise and the hare along a list
    ///
    /// Builds a list from the given values, optionally links its tail back
    /// to an earlier node, and reports whether the list loops.
    #[command(
        long_about = "Build a singly linked list and run Floyd's cycle detection over it. Values \
                      come from the command line or from a TOML fixture with `values = [..]` and \
                      an optional `loop_to = <index>`. When a loop exists the report names the \
                      node where it starts and how long it is."
    )]
    Cycle {
        /// Values of the list, in order
        #[arg(
            value_name = "VALUES",
            value_delimiter = ',',
            conflicts_with = "file",
            env = "LINKED_CURSOR_VALUES"
        )]
        values: Vec<String>,

        /// Link the tail back to the node at this index
        #[arg(
            long,
            value_name = "INDEX",
            conflicts_with = "file",
            env = "LINKED_CURSOR_LOOP_TO"
        )]
        loop_to: Option<usize>,

        /// Read the list from a TOML fixture instead
        #[arg(short = 'F', long, value_name = "FIXTURE", env = "LINKED_CURSOR_FILE")]
        file: Option<PathBuf>,

        /// Include the number of race rounds in the report
        #[arg(long, env = "LINKED_CURSOR_SHOW_ROUNDS")]
        show_rounds: bool,

        /// Exit with error code if a cycle is found
        #[arg(long, env = "LINKED_CURSOR_ERROR_ON_CYCLE")]
        error_on_cycle: bool,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "github")]
    GitHub,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommand_names() {
        let command = Cli::command();
        let names: Vec<_> = command
            .get_subcommands()
            .map(|sub| sub.get_name())
            .collect();
        assert_eq!(names, vec!["edit", "cycle"]);
    }

    #[test]
    fn test_parse_edit() {
        let cli =
            Cli::try_parse_from(["linked-cursor", "edit", "ab{left}", "--text", "xy"]).unwrap();
        match cli.command {
            Commands::Edit {
                script,
                text,
                format,
            } => {
                assert_eq!(script, "ab{left}");
                assert_eq!(text, "xy");
                assert_eq!(format.format, OutputFormat::Human);
            }
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn test_parse_cycle_values() {
        let cli = Cli::try_parse_from([
            "linked-cursor",
            "cycle",
            "a,b,c",
            "--loop-to",
            "1",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Cycle {
                values,
                loop_to,
                file,
                format,
                ..
            } => {
                assert_eq!(values, vec!["a", "b", "c"]);
                assert_eq!(loop_to, Some(1));
                assert_eq!(file, None);
                assert_eq!(format.format, OutputFormat::Json);
            }
            _ => panic!("Expected Cycle command"),
        }
    }

    #[test]
    fn test_file_conflicts_with_values() {
        let result = Cli::try_parse_from(["linked-cursor", "cycle", "a", "--file", "list.toml"]);
        assert!(result.is_err());
    }
}
