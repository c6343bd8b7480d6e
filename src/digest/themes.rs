//! Theme extraction: mood distribution and tag frequency over entries.
//!
//! Counting is deterministic in input order. Both the mood distribution and
//! the tag table accumulate in first-seen order, which is what makes the
//! tie-breaking rules below stable given identical input.

use crate::constants::TOP_TAGS_LIMIT;
use crate::journal_core::{Entry, Mood};
use serde::Serialize;

/// Aggregate statistics computed over a collection of entries.
///
/// This is a value type, never persisted; it is returned alongside the
/// summary text and serializes directly for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeReport {
    /// Total entries analyzed.
    pub entry_count: usize,
    /// Count per mood, in first-seen order; only moods that appear.
    pub mood_distribution: Vec<(Mood, usize)>,
    /// The mood with the highest count. Ties are broken by first-seen
    /// order among the entries, so the result is stable for a given
    /// input sequence.
    pub most_common_mood: Option<Mood>,
    /// Distinct tags with counts, descending by count, ties by first
    /// occurrence, truncated to the top 10.
    pub top_tags: Vec<(String, usize)>,
}

impl ThemeReport {
    /// The report for an empty entry collection.
    pub fn empty() -> Self {
        ThemeReport {
            entry_count: 0,
            mood_distribution: Vec::new(),
            most_common_mood: None,
            top_tags: Vec::new(),
        }
    }
}

/// Extracts themes and patterns from journal entries.
///
/// Mood occurrences are counted across entries that have a mood set. Tags
/// are tokenized per entry (comma-split, trimmed, empties dropped) and
/// counted globally with case-sensitive exact matching.
///
/// # Examples
///
/// ```
/// use recap::digest::extract_themes;
///
/// let report = extract_themes(&[]);
/// assert_eq!(report.entry_count, 0);
/// assert!(report.most_common_mood.is_none());
/// ```
pub fn extract_themes(entries: &[Entry]) -> ThemeReport {
    if entries.is_empty() {
        return ThemeReport::empty();
    }

    let mut mood_counts: Vec<(Mood, usize)> = Vec::new();
    let mut tag_counts: Vec<(String, usize)> = Vec::new();

    for entry in entries {
        if let Some(mood) = entry.mood {
            match mood_counts.iter_mut().find(|(m, _)| *m == mood) {
                Some((_, count)) => *count += 1,
                None => mood_counts.push((mood, 1)),
            }
        }

        for tag in entry.tag_tokens() {
            match tag_counts.iter_mut().find(|(t, _)| t == tag) {
                Some((_, count)) => *count += 1,
                None => tag_counts.push((tag.to_string(), 1)),
            }
        }
    }

    // First-seen wins ties: only a strictly greater count displaces the
    // current maximum.
    let most_common_mood = mood_counts
        .iter()
        .fold(None::<(Mood, usize)>, |best, &(mood, count)| match best {
            Some((_, best_count)) if count <= best_count => best,
            _ => Some((mood, count)),
        })
        .map(|(mood, _)| mood);

    // Stable sort keeps first-seen order among equal counts.
    tag_counts.sort_by(|a, b| b.1.cmp(&a.1));
    tag_counts.truncate(TOP_TAGS_LIMIT);

    ThemeReport {
        entry_count: entries.len(),
        mood_distribution: mood_counts,
        most_common_mood,
        top_tags: tag_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mood: Option<Mood>, tags: &str) -> Entry {
        Entry {
            id: 1,
            user: "default".to_string(),
            title: None,
            content: "content".to_string(),
            mood,
            tags: tags.to_string(),
            created_at: "2024-01-15 08:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_entries() {
        let report = extract_themes(&[]);
        assert_eq!(report, ThemeReport::empty());
        assert_eq!(report.entry_count, 0);
        assert!(report.mood_distribution.is_empty());
        assert!(report.most_common_mood.is_none());
        assert!(report.top_tags.is_empty());
    }

    #[test]
    fn test_single_entry_scenario() {
        let entries = vec![entry(Some(Mood::Positive), "work, gym")];
        let report = extract_themes(&entries);

        assert_eq!(report.entry_count, 1);
        assert_eq!(report.most_common_mood, Some(Mood::Positive));
        assert_eq!(report.mood_distribution, vec![(Mood::Positive, 1)]);
        assert_eq!(
            report.top_tags,
            vec![("work".to_string(), 1), ("gym".to_string(), 1)]
        );
    }

    #[test]
    fn test_mood_counts_skip_unset_moods() {
        let entries = vec![
            entry(Some(Mood::Positive), ""),
            entry(None, ""),
            entry(Some(Mood::Positive), ""),
        ];
        let report = extract_themes(&entries);

        assert_eq!(report.entry_count, 3);
        assert_eq!(report.mood_distribution, vec![(Mood::Positive, 2)]);

        let total: usize = report.mood_distribution.iter().map(|(_, n)| n).sum();
        assert!(total < report.entry_count);
    }

    #[test]
    fn test_mood_total_equals_count_when_all_set() {
        let entries = vec![
            entry(Some(Mood::Neutral), ""),
            entry(Some(Mood::Negative), ""),
        ];
        let report = extract_themes(&entries);
        let total: usize = report.mood_distribution.iter().map(|(_, n)| n).sum();
        assert_eq!(total, report.entry_count);
    }

    #[test]
    fn test_most_common_mood_tie_prefers_first_seen() {
        let entries = vec![
            entry(Some(Mood::Negative), ""),
            entry(Some(Mood::Positive), ""),
            entry(Some(Mood::Positive), ""),
            entry(Some(Mood::Negative), ""),
        ];
        // Both moods count 2; Negative was seen first.
        let report = extract_themes(&entries);
        assert_eq!(report.most_common_mood, Some(Mood::Negative));
    }

    #[test]
    fn test_tag_counts_accumulate_across_entries() {
        let entries = vec![
            entry(None, "gym, work"),
            entry(None, "gym"),
        ];
        let report = extract_themes(&entries);
        assert_eq!(
            report.top_tags,
            vec![("gym".to_string(), 2), ("work".to_string(), 1)]
        );
    }

    #[test]
    fn test_tag_tie_break_by_first_occurrence() {
        let entries = vec![entry(None, "beta, alpha"), entry(None, "alpha, beta")];
        let report = extract_themes(&entries);
        assert_eq!(
            report.top_tags,
            vec![("beta".to_string(), 2), ("alpha".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_tags_sorted_descending_and_truncated() {
        let mut entries = Vec::new();
        // 12 distinct tags; tag-i appears i times
        for i in 1..=12usize {
            for _ in 0..i {
                entries.push(entry(None, &format!("tag-{:02}", i)));
            }
        }
        let report = extract_themes(&entries);

        assert_eq!(report.top_tags.len(), TOP_TAGS_LIMIT);
        assert_eq!(report.top_tags[0], ("tag-12".to_string(), 12));
        for window in report.top_tags.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
        // The two rarest tags fell off the end
        assert!(!report.top_tags.iter().any(|(t, _)| t == "tag-01"));
        assert!(!report.top_tags.iter().any(|(t, _)| t == "tag-02"));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let entries = vec![entry(None, "Gym"), entry(None, "gym")];
        let report = extract_themes(&entries);
        assert_eq!(
            report.top_tags,
            vec![("Gym".to_string(), 1), ("gym".to_string(), 1)]
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let entries = vec![entry(Some(Mood::VeryPositive), "work")];
        let report = extract_themes(&entries);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["entry_count"], 1);
        assert_eq!(json["most_common_mood"], "very_positive");
        assert_eq!(json["top_tags"][0][0], "work");
        assert_eq!(json["top_tags"][0][1], 1);
    }
}
