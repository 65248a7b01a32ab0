use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(linked_cursor::fixture_parse_error),
    help("A fixture needs `values = [..]` and an optional `loop_to = <index>`")
)]
pub struct FixtureParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid key script: {reason}")]
#[diagnostic(
    code(linked_cursor::script_parse_error),
    help("Use {{left}}, {{right}} or {{del}} for keys, and {{{{ or }}}} for literal braces")
)]
pub struct ScriptParseError {
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("{reason}")]
    pub span: SourceSpan,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LinkedCursorError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(linked_cursor::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    FixtureParseError(Box<FixtureParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ScriptParseError(Box<ScriptParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(linked_cursor::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(linked_cursor::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(linked_cursor::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
