//! Core data types and structures
//!
//! This module contains the snapshot types that reports are rendered from,
//! separated from the editor and detector that produce them.

pub mod types;

pub use types::*;
