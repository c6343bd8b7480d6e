//! The digest engine: pure functions over collections of entries.
//!
//! This module contains the three components composed by the summarize
//! operation:
//!
//! - `summarizer`: bounded-length extractive text summaries
//! - `themes`: mood distribution and tag frequency reports
//! - `period`: date span classification (daily/weekly/monthly)
//!
//! All functions here are pure: they take an immutable snapshot of entries
//! supplied by the caller and perform no I/O. Persistence of the composed
//! result lives in `ops::summarize`.

pub mod period;
pub mod summarizer;
pub mod themes;

pub use period::{classify_period, Period};
pub use summarizer::summarize;
pub use themes::{extract_themes, ThemeReport};
