//! Core journal data model without I/O operations.
//!
//! This module contains the pure data types the digest engine operates on:
//! the `Entry` record and its `Mood` classification, plus the tag
//! tokenization rules. Nothing here touches the filesystem or the database.

use crate::errors::DigestError;
use serde::Serialize;

/// Mood classification for a journal entry.
///
/// The set is fixed and ordered from most positive to most negative. The
/// string form (`very_positive`, ...) is used in the database and on the
/// command line; the label form (`Very Positive`, ...) appears in summary
/// text.
///
/// # Examples
///
/// ```
/// use recap::journal_core::Mood;
///
/// let mood = Mood::parse("very_positive").unwrap();
/// assert_eq!(mood, Mood::VeryPositive);
/// assert_eq!(mood.as_str(), "very_positive");
/// assert_eq!(mood.label(), "Very Positive");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl Mood {
    /// Convert to the string representation used in storage and CLI input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::VeryPositive => "very_positive",
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
            Mood::VeryNegative => "very_negative",
        }
    }

    /// Human-readable label used in summary lines.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::VeryPositive => "Very Positive",
            Mood::Positive => "Positive",
            Mood::Neutral => "Neutral",
            Mood::Negative => "Negative",
            Mood::VeryNegative => "Very Negative",
        }
    }

    /// Parse from the string representation.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::UnknownMood` if the string is not a recognized
    /// mood name.
    pub fn parse(s: &str) -> Result<Self, DigestError> {
        match s {
            "very_positive" => Ok(Mood::VeryPositive),
            "positive" => Ok(Mood::Positive),
            "neutral" => Ok(Mood::Neutral),
            "negative" => Ok(Mood::Negative),
            "very_negative" => Ok(Mood::VeryNegative),
            _ => Err(DigestError::UnknownMood(s.to_string())),
        }
    }
}

/// A single journal entry.
///
/// Entries are immutable once created. Each belongs to exactly one user;
/// the storage layer scopes every query by user, so the digest engine only
/// ever sees entries from a single user per invocation.
///
/// The `tags` field keeps the raw comma-separated string as entered; the
/// token sequence is derived on read via [`Entry::tag_tokens`].
#[derive(Debug, Clone)]
pub struct Entry {
    /// Database row id.
    pub id: i64,
    /// Owning user.
    pub user: String,
    /// Optional title; summaries fall back to "Untitled".
    pub title: Option<String>,
    /// Entry body, unbounded length.
    pub content: String,
    /// Optional mood classification.
    pub mood: Option<Mood>,
    /// Raw comma-separated tag string.
    pub tags: String,
    /// Creation timestamp, assigned by the database at insert.
    pub created_at: String,
}

impl Entry {
    /// Derives the tag token sequence from the raw tag string.
    ///
    /// Splits on commas, trims whitespace from each token, and drops empty
    /// tokens, preserving the order in which tags were written.
    ///
    /// # Examples
    ///
    /// ```
    /// use recap::journal_core::Entry;
    ///
    /// let entry = Entry {
    ///     id: 1,
    ///     user: "default".to_string(),
    ///     title: None,
    ///     content: String::new(),
    ///     mood: None,
    ///     tags: " work,  gym ,, travel ".to_string(),
    ///     created_at: "2024-01-15 08:00:00".to_string(),
    /// };
    /// assert_eq!(entry.tag_tokens(), vec!["work", "gym", "travel"]);
    /// ```
    pub fn tag_tokens(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_tags(tags: &str) -> Entry {
        Entry {
            id: 1,
            user: "default".to_string(),
            title: None,
            content: String::new(),
            mood: None,
            tags: tags.to_string(),
            created_at: "2024-01-15 08:00:00".to_string(),
        }
    }

    #[test]
    fn test_mood_round_trip() {
        for mood in [
            Mood::VeryPositive,
            Mood::Positive,
            Mood::Neutral,
            Mood::Negative,
            Mood::VeryNegative,
        ] {
            assert_eq!(Mood::parse(mood.as_str()).unwrap(), mood);
        }
    }

    #[test]
    fn test_mood_parse_unknown() {
        let result = Mood::parse("ecstatic");
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("ecstatic"));
    }

    #[test]
    fn test_mood_labels() {
        assert_eq!(Mood::VeryPositive.label(), "Very Positive");
        assert_eq!(Mood::Neutral.label(), "Neutral");
        assert_eq!(Mood::VeryNegative.label(), "Very Negative");
    }

    #[test]
    fn test_tag_tokens_trims_and_drops_empty() {
        let entry = entry_with_tags(" work,  gym ,, travel ,");
        assert_eq!(entry.tag_tokens(), vec!["work", "gym", "travel"]);
    }

    #[test]
    fn test_tag_tokens_empty_string() {
        let entry = entry_with_tags("");
        assert!(entry.tag_tokens().is_empty());
    }

    #[test]
    fn test_tag_tokens_preserves_order_and_case() {
        let entry = entry_with_tags("Gym, gym, GYM");
        assert_eq!(entry.tag_tokens(), vec!["Gym", "gym", "GYM"]);
    }
}
