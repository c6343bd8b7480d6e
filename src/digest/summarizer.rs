//! Extractive summary generation for journal entries.
//!
//! The summary is built by excerpting source text verbatim, not by
//! rewriting: for each entry we emit an optional mood-annotated title line,
//! the first portion of the content, and a separator. The assembled text is
//! hard-capped at a caller-supplied character limit.

use crate::constants::{
    ELLIPSIS, EMPTY_SUMMARY_SENTINEL, EXCERPT_CHARS, SECTION_SEPARATOR,
};
use crate::journal_core::Entry;

/// Generates a bounded-length extractive summary from journal entries.
///
/// For each entry, in input order:
/// - if a mood is set, a line `[<mood label>] <title or "Untitled">`
/// - if the content is non-empty, its first 200 characters followed by `...`
/// - a `---` separator line, unconditionally
///
/// Lines are joined with newlines. If the assembled text exceeds
/// `max_length` characters it is cut to exactly `max_length` characters and
/// `...` is appended; the cut is character-positional, not sentence-aware.
///
/// An empty entry collection yields the fixed sentinel string, independent
/// of `max_length`.
///
/// # Examples
///
/// ```
/// use recap::digest::summarize;
/// use recap::constants::DEFAULT_SUMMARY_MAX_CHARS;
///
/// let summary = summarize(&[], DEFAULT_SUMMARY_MAX_CHARS);
/// assert_eq!(summary, "No entries to summarize.");
/// ```
pub fn summarize(entries: &[Entry], max_length: usize) -> String {
    if entries.is_empty() {
        return EMPTY_SUMMARY_SENTINEL.to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    for entry in entries {
        if let Some(mood) = entry.mood {
            let title = entry
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or("Untitled");
            parts.push(format!("[{}] {}", mood.label(), title));
        }

        if !entry.content.is_empty() {
            let excerpt: String = entry.content.chars().take(EXCERPT_CHARS).collect();
            parts.push(format!("{}{}", excerpt, ELLIPSIS));
        }

        parts.push(SECTION_SEPARATOR.to_string());
    }

    let summary = parts.join("\n");

    // Hard character cut when over budget.
    if summary.chars().count() > max_length {
        let truncated: String = summary.chars().take(max_length).collect();
        format!("{}{}", truncated, ELLIPSIS)
    } else {
        summary
    }
}
