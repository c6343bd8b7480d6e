/*!
# Recap - A Mood-Aware Journaling Tool

Recap is a command-line tool for recording short, mood-tagged journal
entries and generating periodic digests of them. This file contains the
main application flow, coordinating the various components.

## Usage

```text
recap add <CONTENT> [--title T] [--mood M] [--tags "a, b"] [--user U]
recap summarize --from YYYY-MM-DD --to YYYY-MM-DD [--user U]
recap recent [--days N] [--user U]
recap history [--limit N] [--user U]
```

## Configuration

- `RECAP_DIR`: The directory holding the journal database (defaults to
  `~/.local/share/recap`)
- `RUST_LOG`: Log filter for the tracing subscriber
*/

use clap::Parser;
use recap::cli::{parse_date_arg, CliArgs, Command};
use recap::db::{entries, summaries, Database};
use recap::errors::AppResult;
use recap::journal_core::Mood;
use recap::ops::summarize_range;
use recap::Config;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Coordinates the overall application flow: initializes logging, parses
/// command-line arguments, loads configuration, opens the database, and
/// dispatches the requested command.
///
/// # Errors
///
/// Returns configuration, I/O, digest-validation, or database errors.
fn run() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting recap");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    debug!("Data directory: {:?}", config.data_dir);
    fs::create_dir_all(&config.data_dir)?;

    let db = Database::open(&config.db_path())?;
    db.initialize_schema()?;

    match args.command {
        Command::Add {
            content,
            title,
            mood,
            tags,
            user,
        } => {
            let mood = mood.as_deref().map(Mood::parse).transpose()?;
            let conn = db.get_conn()?;
            let entry_id = entries::insert_entry(
                &conn,
                &entries::NewEntry {
                    user,
                    title,
                    content,
                    mood,
                    tags,
                },
            )?;
            println!("Recorded entry {}", entry_id);
        }

        Command::Summarize { from, to, user } => {
            let start_date = parse_date_arg(&from)?;
            let end_date = parse_date_arg(&to)?;

            let outcome = summarize_range(&db, &user, start_date, end_date)?;

            println!("{}", outcome.summary_text);
            println!();
            match (outcome.record_id, outcome.period) {
                (Some(id), Some(period)) => {
                    println!(
                        "Period: {} ({} to {})",
                        period.as_str(),
                        outcome.start_date,
                        outcome.end_date
                    );
                    println!("Saved summary record {}", id);
                }
                _ => {
                    println!(
                        "No entries between {} and {}; nothing saved",
                        outcome.start_date, outcome.end_date
                    );
                }
            }
            println!("Themes: {}", serde_json::to_string_pretty(&outcome.themes)?);
        }

        Command::Recent { days, user } => {
            let conn = db.get_conn()?;
            let recent = entries::list_recent_entries(&conn, &user, days)?;
            if recent.is_empty() {
                println!("No entries in the last {} days", days);
            }
            for entry in recent {
                let mood = entry.mood.map(|m| m.label()).unwrap_or("-");
                let title = entry.title.as_deref().unwrap_or("Untitled");
                println!("{}  [{}] {}", entry.created_at, mood, title);
            }
        }

        Command::History { limit, user } => {
            let conn = db.get_conn()?;
            let records = summaries::list_summaries(&conn, &user, limit)?;
            if records.is_empty() {
                println!("No summaries recorded");
            }
            for record in records {
                println!(
                    "{}  {:8} {} to {}",
                    record.id,
                    record.period.as_str(),
                    record.start_date,
                    record.end_date
                );
            }
        }
    }

    Ok(())
}
