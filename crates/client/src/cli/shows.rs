//! Show-log CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

/// Show-log management commands.
#[derive(Debug, Parser)]
pub struct ShowsCommand {
    #[command(subcommand)]
    pub action: ShowsAction,
}

/// Available show-log actions.
#[derive(Debug, Subcommand)]
pub enum ShowsAction {
    /// List shows as a calendar month, a single day, or a timeline.
    List {
        /// Show only this date (YYYY-MM-DD, UTC+8).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Calendar month to render (YYYY-MM, UTC+8). Defaults to the
        /// current month when neither --date nor --timeline is given.
        #[arg(long)]
        month: Option<String>,
        /// Render a chronological timeline instead of a calendar.
        #[arg(long)]
        timeline: bool,
    },
    /// Fetch the earliest show on record.
    Earliest,
    /// Create a new show.
    Create {
        /// Show title.
        #[arg(long)]
        title: String,
        /// Show location.
        #[arg(long)]
        location: String,
        /// Start date (YYYY-MM-DD, UTC+8).
        #[arg(long)]
        start_date: NaiveDate,
        /// Start time (HH:MM, UTC+8).
        #[arg(long)]
        start_time: NaiveTime,
        /// End date (YYYY-MM-DD, UTC+8).
        #[arg(long)]
        end_date: NaiveDate,
        /// End time (HH:MM, UTC+8).
        #[arg(long)]
        end_time: NaiveTime,
    },
    /// Update an existing show.
    Update {
        /// Record id.
        id: String,
        /// New title.
        #[arg(long)]
        title: String,
        /// New location.
        #[arg(long)]
        location: String,
        /// New start date (YYYY-MM-DD, UTC+8).
        #[arg(long)]
        start_date: NaiveDate,
        /// New start time (HH:MM, UTC+8).
        #[arg(long)]
        start_time: NaiveTime,
        /// New end date (YYYY-MM-DD, UTC+8).
        #[arg(long)]
        end_date: NaiveDate,
        /// New end time (HH:MM, UTC+8).
        #[arg(long)]
        end_time: NaiveTime,
    },
    /// Delete a show by record id.
    Delete {
        /// Record id.
        id: String,
    },
}
