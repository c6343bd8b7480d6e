//! Constants used throughout the application.
//!
//! This module contains all constants used in the Recap application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "recap";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A mood-aware journaling tool with periodic digests";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Recap data directory.
pub const ENV_VAR_RECAP_DIR: &str = "RECAP_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for journal data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/recap";
/// Filename of the SQLite database inside the data directory.
pub const DB_FILENAME: &str = "journal.db";
/// Default user name when none is given on the command line.
pub const DEFAULT_USER: &str = "default";

// Digest Parameters
/// Sentinel summary returned when there are no entries to summarize.
pub const EMPTY_SUMMARY_SENTINEL: &str = "No entries to summarize.";
/// Number of characters excerpted from each entry's content.
pub const EXCERPT_CHARS: usize = 200;
/// Marker appended to excerpts and truncated summaries.
pub const ELLIPSIS: &str = "...";
/// Separator line emitted after each entry in a summary.
pub const SECTION_SEPARATOR: &str = "---";
/// Default maximum length of an assembled summary, in characters.
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 500;
/// Maximum number of tags reported in a theme report.
pub const TOP_TAGS_LIMIT: usize = 10;
/// Spans of more than this many days are classified as monthly.
pub const WEEKLY_SPAN_MAX_DAYS: i64 = 7;

// Listing Defaults
/// Default look-back window for the `recent` command, in days.
pub const DEFAULT_RECENT_DAYS: i64 = 7;
/// Default number of records shown by the `history` command.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
