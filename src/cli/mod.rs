use crate::constants;
use crate::errors::DigestError;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// A mood-aware journaling tool with periodic digests
#[derive(Parser, Debug)]
#[clap(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new journal entry
    Add {
        /// Entry body text
        content: String,

        /// Optional entry title
        #[clap(short = 't', long)]
        title: Option<String>,

        /// Mood classification (very_positive, positive, neutral, negative, very_negative)
        #[clap(short = 'm', long)]
        mood: Option<String>,

        /// Comma-separated tags
        #[clap(long, default_value = "")]
        tags: String,

        /// User the entry belongs to
        #[clap(short = 'u', long, default_value = constants::DEFAULT_USER)]
        user: String,
    },

    /// Summarize entries within a date range and persist the digest
    Summarize {
        /// Start of the range (format: YYYY-MM-DD or YYYYMMDD)
        #[clap(long)]
        from: String,

        /// End of the range, inclusive (format: YYYY-MM-DD or YYYYMMDD)
        #[clap(long)]
        to: String,

        /// User whose entries are summarized
        #[clap(short = 'u', long, default_value = constants::DEFAULT_USER)]
        user: String,
    },

    /// List entries from the last few days
    Recent {
        /// Look-back window in days
        #[clap(long, default_value_t = constants::DEFAULT_RECENT_DAYS)]
        days: i64,

        /// User whose entries are listed
        #[clap(short = 'u', long, default_value = constants::DEFAULT_USER)]
        user: String,
    },

    /// List stored summary records
    History {
        /// Maximum number of records to show
        #[clap(long, default_value_t = constants::DEFAULT_HISTORY_LIMIT)]
        limit: usize,

        /// User whose summaries are listed
        #[clap(short = 'u', long, default_value = constants::DEFAULT_USER)]
        user: String,
    },
}

/// Parse a date argument in YYYY-MM-DD or YYYYMMDD format.
///
/// # Errors
///
/// Returns `DigestError::InvalidDateFormat` if the string matches neither
/// format.
pub fn parse_date_arg(date_str: &str) -> Result<NaiveDate, DigestError> {
    NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_COMPACT))
        .map_err(DigestError::from)
}
