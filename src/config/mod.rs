//! # Configuration Module
//!
//! This module provides configuration structures for the linked-cursor
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **EditConfig**: Configuration for the `edit` command that replays a key
//!   script
//! - **CycleConfig**: Configuration for the `cycle` command that runs the
//!   detector over a list fixture
//!
//! ## Example
//!
//! ```
//! use linked_cursor::cli::OutputFormat;
//! use linked_cursor::common::ConfigBuilder;
//! use linked_cursor::config::EditConfig;
//!
//! let config = EditConfig::builder()
//!     .with_text("ab".to_string())
//!     .with_script("{left}x".to_string())
//!     .with_format(OutputFormat::Human)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.text, "ab");
//! ```

pub mod cycle;
pub mod edit;

pub use cycle::CycleConfig;
pub use edit::EditConfig;
