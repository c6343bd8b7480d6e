//! Date span classification into period granularities.

use crate::constants::WEEKLY_SPAN_MAX_DAYS;
use crate::errors::DigestError;
use chrono::NaiveDate;
use serde::Serialize;

/// Period granularity assigned to a summarized date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// Parse from database string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Period::Daily),
            "weekly" => Some(Period::Weekly),
            "monthly" => Some(Period::Monthly),
            _ => None,
        }
    }
}

/// Classifies a date range by the length of its span.
///
/// - 0 days -> `Daily`
/// - 1 to 7 days -> `Weekly`
/// - more than 7 days -> `Monthly`
///
/// Negative spans are rejected explicitly rather than silently
/// misclassified; the surrounding system validates ranges before invoking
/// the engine, but this check holds regardless.
///
/// # Errors
///
/// Returns `DigestError::InvalidRange` when `end < start`.
///
/// # Examples
///
/// ```
/// use recap::digest::{classify_period, Period};
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(classify_period(d, d).unwrap(), Period::Daily);
/// ```
pub fn classify_period(start: NaiveDate, end: NaiveDate) -> Result<Period, DigestError> {
    if end < start {
        return Err(DigestError::InvalidRange { start, end });
    }

    let span_days = (end - start).num_days();
    Ok(if span_days == 0 {
        Period::Daily
    } else if span_days <= WEEKLY_SPAN_MAX_DAYS {
        Period::Weekly
    } else {
        Period::Monthly
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_daily() {
        let d = date(2024, 3, 1);
        assert_eq!(classify_period(d, d).unwrap(), Period::Daily);
    }

    #[test]
    fn test_one_day_span_is_weekly() {
        let d = date(2024, 3, 1);
        assert_eq!(
            classify_period(d, d + Duration::days(1)).unwrap(),
            Period::Weekly
        );
    }

    #[test]
    fn test_seven_day_span_is_weekly() {
        let d = date(2024, 3, 1);
        assert_eq!(
            classify_period(d, d + Duration::days(7)).unwrap(),
            Period::Weekly
        );
    }

    #[test]
    fn test_eight_day_span_is_monthly() {
        let d = date(2024, 3, 1);
        assert_eq!(
            classify_period(d, d + Duration::days(8)).unwrap(),
            Period::Monthly
        );
    }

    #[test]
    fn test_negative_span_is_rejected() {
        let d = date(2024, 3, 1);
        let result = classify_period(d, d - Duration::days(1));
        assert!(matches!(
            result,
            Err(DigestError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_period_string_conversion() {
        assert_eq!(Period::Daily.as_str(), "daily");
        assert_eq!(Period::Weekly.as_str(), "weekly");
        assert_eq!(Period::Monthly.as_str(), "monthly");

        assert_eq!(Period::from_str("daily"), Some(Period::Daily));
        assert_eq!(Period::from_str("weekly"), Some(Period::Weekly));
        assert_eq!(Period::from_str("monthly"), Some(Period::Monthly));
        assert_eq!(Period::from_str("invalid"), None);
    }
}
