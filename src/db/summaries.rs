//! Summary record persistence.
//!
//! Summary records are the durable output of the summarize operation. They
//! are written exactly once per invocation with a plain INSERT: calling the
//! engine twice over the same range produces two rows with distinct ids.
//! That duplication is intentional; callers needing exactly-once semantics
//! deduplicate externally. Records are never updated or deleted here.

use crate::digest::Period;
use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

/// A persisted summary record.
#[derive(Debug, Clone)]
pub struct SummaryRecord {
    pub id: i64,
    pub user: String,
    pub period: Period,
    pub summary_text: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: String,
}

fn parse_date(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<SummaryRecord> {
    let period_str: String = row.get(2)?;
    let period = Period::from_str(&period_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            format!("unknown period '{}'", period_str).into(),
        )
    })?;

    Ok(SummaryRecord {
        id: row.get(0)?,
        user: row.get(1)?,
        period,
        summary_text: row.get(3)?,
        start_date: parse_date(row, 4)?,
        end_date: parse_date(row, 5)?,
        created_at: row.get(6)?,
    })
}

/// Inserts a summary record and returns its id.
///
/// Always inserts a new row; there is no conflict target. Two calls with
/// identical arguments yield two records.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_summary(
    conn: &Connection,
    user: &str,
    period: Period,
    summary_text: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<i64> {
    debug!(
        "Inserting {} summary for user {} ({} to {})",
        period.as_str(),
        user,
        start_date,
        end_date
    );

    conn.execute(
        r#"
        INSERT INTO summaries (user, period, summary_text, start_date, end_date)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            user,
            period.as_str(),
            summary_text,
            start_date.to_string(),
            end_date.to_string(),
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let summary_id = conn.last_insert_rowid();
    debug!("Summary inserted with id {}", summary_id);
    Ok(summary_id)
}

/// Retrieves a summary record by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no record exists with the given id.
pub fn get_summary(conn: &Connection, id: i64) -> AppResult<Option<SummaryRecord>> {
    debug!("Getting summary with id {}", id);

    let result = conn
        .query_row(
            r#"
            SELECT id, user, period, summary_text, start_date, end_date, created_at
            FROM summaries
            WHERE id = ?1
            "#,
            params![id],
            row_to_record,
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    Ok(result)
}

/// Lists one user's summary records, most recently ended range first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_summaries(conn: &Connection, user: &str, limit: usize) -> AppResult<Vec<SummaryRecord>> {
    debug!("Listing summaries for user {} (limit: {})", user, limit);

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, user, period, summary_text, start_date, end_date, created_at
            FROM summaries
            WHERE user = ?1
            ORDER BY end_date DESC, id DESC
            LIMIT ?2
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let records = stmt
        .query_map(params![user, limit as i64], row_to_record)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Found {} summaries", records.len());
    Ok(records)
}
