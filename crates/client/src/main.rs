//! showlog-client CLI entry point.

use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate, Utc};
use clap::Parser;
use showlog_core::showlog::{
    build_day_data, civil_to_millis, format_civil_date, is_on_break, month_dates, show_tz,
    timeline_entries, transform, CreateShowLogRequest, ShowStatus, UpdateShowLogRequest,
    ViewEntry, BREAK_MARKER,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showlog_client::cli::{breaks::BreaksAction, shows::ShowsAction, Cli, Commands, OutputFormat};
use showlog_client::client::ShowLogStore;
use showlog_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showlog_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = ShowLogStore::new(&cli.base_url);

    match cli.command {
        Commands::Shows(shows_cmd) => match shows_cmd.action {
            ShowsAction::List {
                date,
                month,
                timeline,
            } => {
                let entries = fetch_entries(&store).await?;
                if timeline {
                    let timeline = timeline_entries(&entries);
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&timeline, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_entries(&timeline)),
                    }
                } else if let Some(date) = date {
                    let date_str = format_civil_date(date);
                    let day: Vec<ViewEntry> = entries
                        .into_iter()
                        .filter(|entry| entry.date == date_str)
                        .collect();
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&day, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_entries(&day)),
                    }
                } else {
                    let (year, month) = resolve_month(month.as_deref())?;
                    let days = build_day_data(&month_dates(year, month), &entries);
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&days, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_month(&days)),
                    }
                }
            }
            ShowsAction::Earliest => {
                let records = store.earliest().await?;
                let entries = transform(&records, Utc::now());
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&entries, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_entries(&entries)),
                }
            }
            ShowsAction::Create {
                title,
                location,
                start_date,
                start_time,
                end_date,
                end_time,
            } => {
                require_editor(cli.editor)?;
                let req = CreateShowLogRequest::new(
                    title,
                    location,
                    civil_to_millis(start_date.and_time(start_time)),
                    civil_to_millis(end_date.and_time(end_time)),
                );
                let record = store.insert(&req).await?;
                tracing::info!(id = %record.id, "show created");
                if !cli.quiet {
                    println!("添加成功: {}", record.id);
                }
            }
            ShowsAction::Update {
                id,
                title,
                location,
                start_date,
                start_time,
                end_date,
                end_time,
            } => {
                require_editor(cli.editor)?;
                let req = UpdateShowLogRequest::new(
                    id,
                    title,
                    location,
                    civil_to_millis(start_date.and_time(start_time)),
                    civil_to_millis(end_date.and_time(end_time)),
                );
                let record = store.update(&req).await?;
                tracing::info!(id = %record.id, "show updated");
                if !cli.quiet {
                    println!("更新成功: {}", record.id);
                }
            }
            ShowsAction::Delete { id } => {
                require_editor(cli.editor)?;
                store.delete(&id).await?;
                tracing::info!(%id, "show deleted");
                if !cli.quiet {
                    println!("删除成功: {id}");
                }
            }
        },
        Commands::Break(breaks_cmd) => match breaks_cmd.action {
            BreaksAction::Status => {
                let entries = fetch_entries(&store).await?;
                let on_break = is_on_break(&entries);
                match cli.format {
                    OutputFormat::Json => {
                        println!("{}", format_output(&serde_json::json!({ "onBreak": on_break }), cli.format))
                    }
                    OutputFormat::Pretty => println!("{}", pretty::format_break_status(on_break)),
                }
            }
            BreaksAction::Start => {
                require_editor(cli.editor)?;
                let entries = fetch_entries(&store).await?;
                if is_on_break(&entries) {
                    bail!("已处于暂休状态");
                }
                let req = CreateShowLogRequest::break_starting(Utc::now());
                let record = store.insert(&req).await?;
                tracing::info!(id = %record.id, "break started");
                if !cli.quiet {
                    println!("暂休开始");
                }
            }
            BreaksAction::Stop => {
                require_editor(cli.editor)?;
                let entries = fetch_entries(&store).await?;
                let Some(active) = entries.iter().find(|entry| {
                    entry.title == BREAK_MARKER
                        && entry.status == ShowStatus::InProgress
                        && entry.is_original
                }) else {
                    bail!("没有找到暂休记录");
                };
                let delete_id = active.original_id.as_deref().unwrap_or(&active.id);
                store.delete(delete_id).await?;
                tracing::info!(id = %delete_id, "break stopped");
                if !cli.quiet {
                    println!("暂休结束");
                }
            }
        },
    }

    Ok(())
}

/// Fetch the full record set and transform it against the current instant.
///
/// Every flow refetches rather than patching local state; the store is the
/// single source of truth.
async fn fetch_entries(store: &ShowLogStore) -> Result<Vec<ViewEntry>> {
    let records = store.list().await?;
    Ok(transform(&records, Utc::now()))
}

/// Reject mutating commands when editor mode is off.
fn require_editor(editor: bool) -> Result<()> {
    if !editor {
        bail!("编辑操作需要编辑者模式 (--editor 或 SHOWLOG_EDITOR_MODE=true)");
    }
    Ok(())
}

/// Resolve a `YYYY-MM` argument, defaulting to the current UTC+8 month.
fn resolve_month(month: Option<&str>) -> Result<(i32, u32)> {
    match month {
        Some(raw) => {
            let first = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
                .map_err(|_| anyhow::anyhow!("无效的月份格式 (应为 YYYY-MM): {raw}"))?;
            Ok((first.year(), first.month()))
        }
        None => {
            let today = Utc::now().with_timezone(&show_tz()).date_naive();
            Ok((today.year(), today.month()))
        }
    }
}
