//! Configuration management for the recap application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `RECAP_DIR`: Path to the data directory (defaults to ~/.local/share/recap)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{DB_FILENAME, DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_RECAP_DIR};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the recap application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use recap::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.db_path().ends_with("journal.db"));
/// ```
#[derive(Debug)]
pub struct Config {
    /// Directory where the journal database lives.
    ///
    /// Loaded from the RECAP_DIR environment variable with a fallback to
    /// ~/.local/share/recap if not specified.
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded using `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use recap::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Data directory: {:?}", config.data_dir),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_RECAP_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory path is empty".to_string(),
            ));
        }

        Ok(Config { data_dir })
    }

    /// Path of the SQLite database file inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILENAME)
    }
}
