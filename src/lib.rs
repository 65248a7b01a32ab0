//! # Linked Cursor - Cursor Editing and Cycle Detection on Linked Lists
//!
//! Two small engines over a forward-only singly linked list.
//!
//! ## Main Components
//!
//! - **List**: Arena-backed singly linked list addressed by [`list::NodeId`]
//!   handles
//! - **Detector**: Floyd's tortoise and hare, reporting whether a chain loops
//!   and where the loop starts
//! - **Editor**: A text editor that stores one value per node and keeps a
//!   movable cursor between them
//! - **Reports**: Human-readable and machine-readable output for the CLI
//!
//! ## Usage
//!
//! ### Example: Editing Text
//!
//! ```
//! use linked_cursor::editor::Editor;
//!
//! let mut editor = Editor::new();
//! editor.insert('x').arrow_left().insert('y');
//!
//! // With the cursor before the first character, inserting prepends
//! assert_eq!(editor.contents(), "yx");
//! assert_eq!(editor.cursor_value(), Some(&'y'));
//! ```
//!
//! ### Example: Detecting a Cycle
//!
//! ```
//! use linked_cursor::detector::{find_cycle, has_cycle};
//! use linked_cursor::list::LinkedList;
//!
//! let mut list = LinkedList::from_values(1..=5);
//! assert!(!has_cycle(&list));
//!
//! // Link the tail back to itself
//! let tail = list.tail().unwrap();
//! list.set_next(tail, Some(tail));
//!
//! assert!(has_cycle(&list));
//! assert_eq!(find_cycle(&list).map(|cycle| cycle.length()), Some(1));
//! ```
//!
//! ### Example: Replaying a Key Script
//!
//! ```
//! use linked_cursor::editor::Editor;
//! use linked_cursor::script::parse_script;
//!
//! # fn main() -> miette::Result<()> {
//! let mut editor = Editor::with_text("helo".chars().collect());
//! for key in parse_script("{left}l")? {
//!     editor.apply(key);
//! }
//! assert_eq!(editor.contents(), "hello");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod editor;
pub mod error;
pub mod executors;
pub mod fixture;
pub mod list;
pub mod reports;
pub mod script;

pub use common::ConfigBuilder;

/// Install the stderr tracing subscriber
///
/// The filter comes from `LINKED_CURSOR_LOG` and falls back to `warn`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV};

    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    init_logging();

    let cli = Cli::parse();
    execute_command(cli.command)
}
