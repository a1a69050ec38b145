//! CLI command definitions.

pub mod breaks;
pub mod shows;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the show-log store.
#[derive(Debug, Parser)]
#[command(name = "showlog-client")]
#[command(about = "CLI client for the show-log store", long_about = None)]
pub struct Cli {
    /// Store base URL.
    #[arg(long, env = "SHOWLOG_API_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Enable editor mode (required for create/update/delete/break actions).
    /// This is a UI affordance flag, not authentication.
    #[arg(long, env = "SHOWLOG_EDITOR_MODE")]
    pub editor: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show-log management and calendar views.
    Shows(shows::ShowsCommand),
    /// Break (暂休) state management.
    Break(breaks::BreaksCommand),
}
