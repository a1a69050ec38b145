//! Break (暂休) CLI commands.

use clap::{Parser, Subcommand};

/// Break state commands.
#[derive(Debug, Parser)]
pub struct BreaksCommand {
    #[command(subcommand)]
    pub action: BreaksAction,
}

/// Available break actions.
#[derive(Debug, Subcommand)]
pub enum BreaksAction {
    /// Report whether the performer is currently on break.
    Status,
    /// Start an open-ended break beginning today.
    Start,
    /// Stop the current break by deleting its record.
    Stop,
}
