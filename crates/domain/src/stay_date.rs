//! Stay dates: the start and end of a reservation.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A reservation date exactly as the caller supplied it.
///
/// The raw text is persisted untouched. [`StayDate::calendar_date`]
/// normalizes it for comparisons: plain dates are taken as-is, date-times
/// with an offset are converted to UTC first, and any time-of-day is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StayDate(String);

impl StayDate {
    /// Wrap raw date text without checking it.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar date this value denotes, or `None` when the text is not
    /// a recognizable date.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        normalize(&self.0)
    }
}

impl fmt::Display for StayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NaiveDate> for StayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }
}

/// Parse a query bound such as `2024-01-31`.
///
/// Date-times are accepted too and truncated the same way stored dates are.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when `raw` is not a date.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    normalize(raw).ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
}

fn normalize(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, LOCAL_DATE_TIME_FORMAT)
        .ok()
        .map(|date_time| date_time.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_read_plain_calendar_date() {
        assert_eq!(
            StayDate::new("2024-01-05").calendar_date(),
            Some(ymd(2024, 1, 5))
        );
    }

    #[test]
    fn should_drop_time_of_day() {
        assert_eq!(
            StayDate::new("2024-01-05T23:10:00").calendar_date(),
            Some(ymd(2024, 1, 5))
        );
        assert_eq!(
            StayDate::new("2024-01-05T08:00:00.000Z").calendar_date(),
            Some(ymd(2024, 1, 5))
        );
    }

    #[test]
    fn should_convert_offset_date_time_to_utc_before_truncating() {
        assert_eq!(
            StayDate::new("2024-01-05T23:30:00-05:00").calendar_date(),
            Some(ymd(2024, 1, 6))
        );
    }

    #[test]
    fn should_return_none_when_text_is_not_a_date() {
        assert_eq!(StayDate::new("next tuesday").calendar_date(), None);
        assert_eq!(StayDate::new("").calendar_date(), None);
    }

    #[test]
    fn should_keep_raw_text_through_serde() {
        let date = StayDate::new("2024-01-05T10:00:00Z");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-01-05T10:00:00Z\"");
    }

    #[test]
    fn should_reject_invalid_query_bound() {
        assert_eq!(
            parse_calendar_date("2024-13-01"),
            Err(ValidationError::InvalidDate("2024-13-01".to_string()))
        );
        assert_eq!(parse_calendar_date("2024-02-29"), Ok(ymd(2024, 2, 29)));
    }

    #[test]
    fn should_format_calendar_date_as_iso() {
        assert_eq!(StayDate::from(ymd(2024, 3, 9)).as_str(), "2024-03-09");
    }
}
