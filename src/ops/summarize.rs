//! Summarize orchestration for journal entries.
//!
//! This module composes the three pure digest components over a
//! caller-supplied entry collection and persists the result. It is the only
//! place in the engine with a side effect: a single summary-record insert.
//!
//! # Flow
//!
//! 1. Validate the date range
//! 2. Generate the extractive summary text
//! 3. Extract themes (mood distribution, tag frequency)
//! 4. Classify the span into a period granularity
//! 5. Persist exactly one summary record and return it with the themes

use crate::constants::EMPTY_SUMMARY_SENTINEL;
use crate::db::entries::list_entries_in_range;
use crate::db::summaries::insert_summary;
use crate::db::Database;
use crate::digest::{classify_period, extract_themes, summarize, Period, ThemeReport};
use crate::errors::{AppResult, DigestError};
use crate::journal_core::Entry;
use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{debug, info};

/// Result of one summarize invocation.
///
/// `record_id` and `period` are `None` when the range held no entries: the
/// outcome is then transient and nothing was written to storage.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    /// Id of the persisted summary record, if one was written.
    pub record_id: Option<i64>,
    /// The assembled summary text (or the empty-range sentinel).
    pub summary_text: String,
    /// Aggregate statistics over the summarized entries.
    pub themes: ThemeReport,
    /// Period classification of the range, when a record was persisted.
    pub period: Option<Period>,
    /// Echo of the requested range.
    pub start_date: NaiveDate,
    /// Echo of the requested range.
    pub end_date: NaiveDate,
}

/// Builds and persists a summary over a pre-filtered entry collection.
///
/// `entries` must be the full set of one user's entries whose creation date
/// falls within `[start_date, end_date]` inclusive, fetched by the storage
/// layer. The range is validated before any aggregation runs.
///
/// An empty collection is not an error: the outcome carries the sentinel
/// summary text and a zero-count theme report, and no record is written.
///
/// There is no deduplication: invoking this twice with identical arguments
/// persists two distinct records.
///
/// # Errors
///
/// Returns `DigestError::InvalidRange` when `end_date < start_date`, or a
/// database error if the insert fails.
pub fn build_summary(
    conn: &Connection,
    user: &str,
    entries: &[Entry],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<SummaryOutcome> {
    // Reject bad ranges before any aggregation or writes.
    if end_date < start_date {
        return Err(DigestError::InvalidRange {
            start: start_date,
            end: end_date,
        }
        .into());
    }

    if entries.is_empty() {
        debug!(
            "No entries for user {} between {} and {}; nothing persisted",
            user, start_date, end_date
        );
        return Ok(SummaryOutcome {
            record_id: None,
            summary_text: EMPTY_SUMMARY_SENTINEL.to_string(),
            themes: ThemeReport::empty(),
            period: None,
            start_date,
            end_date,
        });
    }

    let summary_text = summarize(entries, crate::constants::DEFAULT_SUMMARY_MAX_CHARS);
    let themes = extract_themes(entries);
    let period = classify_period(start_date, end_date)?;

    let record_id = insert_summary(conn, user, period, &summary_text, start_date, end_date)?;
    info!(
        "Persisted {} summary {} for user {} over {} entries",
        period.as_str(),
        record_id,
        user,
        entries.len()
    );

    Ok(SummaryOutcome {
        record_id: Some(record_id),
        summary_text,
        themes,
        period: Some(period),
        start_date,
        end_date,
    })
}

/// Fetches one user's entries for a date range and builds a summary over
/// them.
///
/// This is the entry point used by the CLI: the storage layer does the
/// fetching and filtering, then hands the immutable snapshot to
/// [`build_summary`].
///
/// # Errors
///
/// Returns an error if the range is invalid or a database operation fails.
pub fn summarize_range(
    db: &Database,
    user: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<SummaryOutcome> {
    if end_date < start_date {
        return Err(DigestError::InvalidRange {
            start: start_date,
            end: end_date,
        }
        .into());
    }

    let conn = db.get_conn()?;
    let entries = list_entries_in_range(&conn, user, start_date, end_date)?;
    build_summary(&conn, user, &entries, start_date, end_date)
}
