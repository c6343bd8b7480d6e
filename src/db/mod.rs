//! Database operations for journal entries and summary records.
//!
//! This module provides SQLite storage for entries and the immutable
//! summary records produced by the digest engine. It uses connection
//! pooling via r2d2 for efficient concurrent access.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `entries`: Entry creation and range queries
//! - `summaries`: Summary record persistence and listing
//!
//! # Example
//!
//! ```no_run
//! use recap::db::Database;
//! use std::path::Path;
//!
//! let db_path = Path::new("/tmp/journal.db");
//! let db = Database::open(db_path)?;
//! db.initialize_schema()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entries;
pub mod schema;
pub mod summaries;

use crate::errors::{AppResult, DatabaseError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle with connection pooling.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the journal database.
    ///
    /// If the database file doesn't exist, it will be created.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened or the
    /// connection pool cannot be initialized.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(5)
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        // Verify we can actually talk to the database
        let conn = pool.get().map_err(DatabaseError::Pool)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool.get().map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables and indexes if they don't exist.
    /// This is idempotent and safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}
