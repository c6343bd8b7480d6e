//! Error handling utilities for the recap application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Represents error cases detected while validating digest inputs.
///
/// Both variants are client-input errors: they are reported before any
/// aggregation runs and before anything is written to storage.
///
/// # Examples
///
/// ```
/// use recap::errors::DigestError;
/// use chrono::NaiveDate;
///
/// let error = DigestError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// };
/// assert!(format!("{}", error).contains("before start date"));
/// ```
#[derive(Debug, Error)]
pub enum DigestError {
    /// A date string could not be parsed.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD or YYYYMMDD.")]
    InvalidDateFormat(#[from] chrono::ParseError),

    /// The requested range ends before it starts.
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidRange {
        /// Start of the requested range
        start: NaiveDate,
        /// End of the requested range
        end: NaiveDate,
    },

    /// A mood string is not one of the recognized mood names.
    #[error("Unknown mood '{0}'. Expected one of: very_positive, positive, neutral, negative, very_negative")]
    UnknownMood(String),
}

/// Represents specific error cases that can occur during database operations.
///
/// # Examples
///
/// ```
/// use recap::errors::DatabaseError;
///
/// let error = DatabaseError::NotFound("Summary with id 123 not found".to_string());
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// Requested row not found in database.
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Represents all possible errors that can occur in the recap application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors detected while validating digest inputs.
    #[error("Digest error: {0}")]
    Digest(#[from] DigestError),

    /// Errors related to database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors while serializing output for display.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use recap::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let range_error = AppError::Digest(DigestError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        });
        assert!(format!("{}", range_error).contains("Digest error"));
        assert!(format!("{}", range_error).contains("2024-03-10"));
        assert!(format!("{}", range_error).contains("2024-03-01"));
    }

    #[test]
    fn test_digest_error_unknown_mood() {
        let error = DigestError::UnknownMood("ecstatic".to_string());
        let message = format!("{}", error);
        assert!(message.contains("ecstatic"));
        assert!(message.contains("very_positive"));
    }

    #[test]
    fn test_database_error_conversion_to_app_error() {
        let db_error = DatabaseError::NotFound("Summary with id 7 not found".to_string());
        let app_error: AppError = db_error.into();

        match app_error {
            AppError::Database(DatabaseError::NotFound(msg)) => {
                assert!(msg.contains("id 7"));
            }
            _ => panic!("Expected AppError::Database variant"),
        }
    }
}
