//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use clap::{Args, Subcommand};

use crate::role::Role;

/// Check command arguments.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// The message text to check
    pub message: String,

    /// Role of the sender
    #[arg(short, long, value_enum, default_value_t = Role::Student)]
    pub role: Role,

    /// Apply markup escaping to the stored body of an allowed message
    #[arg(long)]
    pub escape: bool,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Patterns command arguments.
#[derive(Debug, Args)]
pub struct PatternsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the configuration file path
    Path,
}
