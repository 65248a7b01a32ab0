//! Command implementations for the linked-cursor CLI
//!
//! This module contains the implementations for each CLI command:
//! - edit: Type a key script into the linked-list editor
//! - cycle: Race the tortoise and the hare along a list

pub mod cycle;
pub mod edit;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Edit { .. } => edit::execute_edit_command(command),
        Commands::Cycle { .. } => cycle::execute_cycle_command(command),
    }
}
