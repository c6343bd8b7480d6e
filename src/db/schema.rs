//! Database schema definitions and initialization.
//!
//! This module defines the SQLite schema for journal entries and summary
//! records. Tables are created with indexes supporting the per-user,
//! date-scoped queries the engine relies on.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version.
///
/// Increment this whenever schema changes are made to support future migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Creates all database tables and indexes.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// # Tables
///
/// - `entries`: user-authored journal entries
/// - `summaries`: immutable summary records produced by the digest engine
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(DatabaseError::Sqlite)?;

    // Entries table: immutable once created, owned by exactly one user
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user TEXT NOT NULL,
            title TEXT,
            content TEXT NOT NULL,
            mood TEXT CHECK(mood IN ('very_positive', 'positive', 'neutral', 'negative', 'very_negative')),
            tags TEXT NOT NULL DEFAULT '',
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_created_at ON entries(user, created_at);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Summaries table: one row per summarize invocation, no dedup. There is
    // deliberately no uniqueness constraint over (user, period, dates).
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS summaries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user TEXT NOT NULL,
            period TEXT NOT NULL CHECK(period IN ('daily', 'weekly', 'monthly')),
            summary_text TEXT NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_summaries_user_end_date ON summaries(user, end_date DESC);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Schema version tracking table
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL,
            applied_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Record schema version if not already recorded
    let current_version = get_schema_version(conn)?;
    if current_version.is_none() {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?)",
            [SCHEMA_VERSION],
        )
        .map_err(DatabaseError::Sqlite)?;
        info!("Initialized database schema version {}", SCHEMA_VERSION);
    } else {
        debug!("Schema version already recorded: {:?}", current_version);
    }

    debug!("Database tables created successfully");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// Returns `None` if the schema_version table doesn't exist or is empty.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than missing table.
pub fn get_schema_version(conn: &Connection) -> AppResult<Option<i32>> {
    let result = conn.query_row(
        "SELECT version FROM schema_version ORDER BY applied_at DESC LIMIT 1",
        [],
        |row| row.get(0),
    );

    match result {
        Ok(version) => Ok(Some(version)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) if e.to_string().contains("no such table") => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}
