//! Entry persistence and range queries.
//!
//! Entries are insert-only: once written they are never updated or deleted
//! by this application. All queries are scoped to a single user, which is
//! what upholds the engine invariant that one invocation only ever sees one
//! user's entries.

use crate::errors::{AppResult, DatabaseError};
use crate::journal_core::{Entry, Mood};
use chrono::{Duration, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};
use tracing::debug;

/// Fields supplied by the caller when creating an entry.
///
/// The id and creation timestamp are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user: String,
    pub title: Option<String>,
    pub content: String,
    pub mood: Option<Mood>,
    pub tags: String,
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let mood: Option<String> = row.get(4)?;
    let mood = mood
        .map(|s| {
            Mood::parse(&s).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })
        })
        .transpose()?;

    Ok(Entry {
        id: row.get(0)?,
        user: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        mood,
        tags: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Inserts a new journal entry and returns its id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_entry(conn: &Connection, new_entry: &NewEntry) -> AppResult<i64> {
    debug!("Inserting entry for user {}", new_entry.user);

    conn.execute(
        r#"
        INSERT INTO entries (user, title, content, mood, tags)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            new_entry.user,
            new_entry.title,
            new_entry.content,
            new_entry.mood.map(|m| m.as_str()),
            new_entry.tags,
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let entry_id = conn.last_insert_rowid();
    debug!("Entry inserted with id {}", entry_id);
    Ok(entry_id)
}

/// Lists one user's entries whose creation date falls within
/// `[start_date, end_date]` inclusive.
///
/// The comparison is date-only; time of day is ignored. Results are
/// ordered by creation time ascending so the digest engine sees entries in
/// the order they were written.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries_in_range(
    conn: &Connection,
    user: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<Vec<Entry>> {
    debug!(
        "Listing entries for user {} between {} and {}",
        user, start_date, end_date
    );

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, user, title, content, mood, tags, created_at
            FROM entries
            WHERE user = ?1 AND date(created_at) BETWEEN ?2 AND ?3
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map(
            params![user, start_date.to_string(), end_date.to_string()],
            row_to_entry,
        )
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Found {} entries", entries.len());
    Ok(entries)
}

/// Lists one user's entries from the last `days` days, newest first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_recent_entries(conn: &Connection, user: &str, days: i64) -> AppResult<Vec<Entry>> {
    debug!("Listing entries for user {} from the last {} days", user, days);

    // CURRENT_TIMESTAMP is UTC, so the cutoff is computed in UTC too.
    let cutoff = Utc::now().date_naive() - Duration::days(days);

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, user, title, content, mood, tags, created_at
            FROM entries
            WHERE user = ?1 AND date(created_at) > ?2
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map(params![user, cutoff.to_string()], row_to_entry)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Found {} recent entries", entries.len());
    Ok(entries)
}
