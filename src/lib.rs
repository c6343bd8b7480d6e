/*!
# Recap

Recap is a small journaling tool for short, mood-tagged entries, designed to
help users look back over what they wrote. Entries carry an optional title,
a mood classification, and free-form comma-separated tags; the digest engine
turns a date range of them into a bounded extractive summary, a theme
report, and a persisted summary record.

## Core Features

- Record mood- and tag-annotated journal entries
- Generate daily/weekly/monthly digests over a date range
- Report mood distribution and top tags for the range
- Review recent entries and past digests

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal_core`: Pure entry/mood data model
- `digest`: Pure summarization, theme extraction, and period classification
- `db`: SQLite persistence for entries and summary records
- `ops`: Orchestration composing the digest engine with storage

## Usage Example

```rust,no_run
use recap::db::Database;
use recap::ops::summarize_range;
use chrono::NaiveDate;

fn main() -> recap::AppResult<()> {
    let config = recap::Config::load()?;
    let db = Database::open(&config.db_path())?;
    db.initialize_schema()?;

    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    let outcome = summarize_range(&db, "default", start, end)?;
    println!("{}", outcome.summary_text);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// SQLite persistence for entries and summary records
pub mod db;
/// Pure digest engine: summarizer, theme extractor, period classifier
pub mod digest;
/// Error types and utilities for error handling
pub mod errors;
/// Core journal data model
pub mod journal_core;
/// High-level operations composing the engine with storage
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use digest::{classify_period, extract_themes, summarize, Period, ThemeReport};
pub use errors::{AppError, AppResult, DigestError};
pub use journal_core::{Entry, Mood};
pub use ops::{build_summary, summarize_range, SummaryOutcome};
