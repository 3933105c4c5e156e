//! Calendar days and the date windows used to filter exercise logs.
//!
//! Exercises are recorded against a calendar day with no time-of-day
//! component. Filtering therefore works on whole days: a window built from
//! `from = 2023-01-05` and `to = 2023-01-05` covers every exercise logged on
//! the fifth.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display format for calendar days, e.g. `Thu Jan 05 2023`.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Raised when a string cannot be read as a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{input}` is not a calendar date")]
pub struct CalendarDateParseError {
    input: String,
}

impl CalendarDateParseError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        self.input.as_str()
    }
}

/// A calendar day without time-of-day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date in the timestamp's
/// own offset) and the display format. Serialises as `YYYY-MM-DD`.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::CalendarDate;
///
/// let date: CalendarDate = "2023-01-05".parse().expect("iso date");
/// assert_eq!(date.to_string(), "Thu Jan 05 2023");
/// assert_eq!("Thu Jan 05 2023".parse::<CalendarDate>(), Ok(date));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wrap an existing [`NaiveDate`].
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a date from its components, returning `None` when invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Underlying chrono date.
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// ISO 8601 rendering, `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// Parse an optional query value, treating blank input as absent.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, CalendarDateParseError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarDateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, ISO_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(timestamp.date_naive()));
        }
        NaiveDate::parse_from_str(value, DISPLAY_FORMAT)
            .map(Self)
            .map_err(|_| CalendarDateParseError {
                input: s.to_owned(),
            })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(value: CalendarDate) -> Self {
        value.0
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_iso_string()
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarDateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Half-open range of calendar days `[start, end)`.
///
/// `start` is the first included day; `end` is the first excluded day, so a
/// window built with [`DateWindow::between`] covers the whole `to` day. A
/// missing bound leaves that side open.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::{CalendarDate, DateWindow};
///
/// let day: CalendarDate = "2023-01-05".parse().expect("date");
/// let window = DateWindow::between(Some(day), Some(day));
/// assert!(window.contains(day));
/// assert!(!window.contains("2023-01-06".parse().expect("date")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateWindow {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateWindow {
    /// Window with no bounds.
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Window covering `from` through the whole of `to`, both inclusive.
    pub fn between(from: Option<CalendarDate>, to: Option<CalendarDate>) -> Self {
        Self {
            start: from.map(|d| d.as_naive()),
            // The last representable day has no successor; leave the end open.
            end: to.and_then(|day| day.as_naive().succ_opt()),
        }
    }

    /// First included day, if bounded below.
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// First excluded day, if bounded above.
    pub const fn end_exclusive(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Whether the window can match no day at all.
    pub fn is_empty(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start >= end)
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: CalendarDate) -> bool {
        let day = date.as_naive();
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day(raw: &str) -> CalendarDate {
        raw.parse().expect("fixture date parses")
    }

    #[rstest]
    #[case("2023-01-05")]
    #[case("2023-01-05T10:30:00Z")]
    #[case("2023-01-05T23:30:00-05:00")]
    #[case("Thu Jan 05 2023")]
    #[case("  2023-01-05 ")]
    fn parses_supported_formats(#[case] raw: &str) {
        assert_eq!(raw.parse::<CalendarDate>(), Ok(day("2023-01-05")));
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("2023-02-30")]
    #[case("2023-13-01")]
    #[case("05/01/2023")]
    fn rejects_unparseable_input(#[case] raw: &str) {
        let err = raw.parse::<CalendarDate>().expect_err("input is invalid");
        assert_eq!(err.input(), raw);
    }

    #[rstest]
    fn displays_as_calendar_day_string() {
        assert_eq!(day("2023-01-05").to_string(), "Thu Jan 05 2023");
        assert_eq!(day("2024-12-25").to_string(), "Wed Dec 25 2024");
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    fn parse_optional_treats_blank_as_absent(
        #[case] raw: Option<&str>,
        #[case] expected: Option<CalendarDate>,
    ) {
        assert_eq!(CalendarDate::parse_optional(raw), Ok(expected));
    }

    #[rstest]
    fn parse_optional_reports_malformed_input() {
        assert!(CalendarDate::parse_optional(Some("nope")).is_err());
    }

    #[rstest]
    fn serialises_as_iso_date() {
        let value = serde_json::to_value(day("2023-01-05")).expect("serialise date");
        assert_eq!(value, serde_json::json!("2023-01-05"));
    }

    #[rstest]
    #[case("2023-01-04", false)]
    #[case("2023-01-05", true)]
    #[case("2023-01-07", true)]
    #[case("2023-01-10", true)]
    #[case("2023-01-11", false)]
    fn between_includes_both_whole_days(#[case] probe: &str, #[case] expected: bool) {
        let window = DateWindow::between(Some(day("2023-01-05")), Some(day("2023-01-10")));
        assert_eq!(window.contains(day(probe)), expected);
    }

    #[rstest]
    fn open_bounds_match_everything_on_that_side() {
        let upper_only = DateWindow::between(None, Some(day("2023-01-05")));
        assert!(upper_only.contains(day("1970-01-01")));
        assert!(!upper_only.contains(day("2023-01-06")));

        let lower_only = DateWindow::between(Some(day("2023-01-05")), None);
        assert!(lower_only.contains(day("2999-12-31")));
        assert!(!lower_only.contains(day("2023-01-04")));

        assert!(DateWindow::unbounded().contains(day("2023-01-05")));
    }

    #[rstest]
    fn inverted_window_is_empty() {
        let window = DateWindow::between(Some(day("2023-01-10")), Some(day("2023-01-05")));
        assert!(window.is_empty());
        assert!(!window.contains(day("2023-01-07")));
    }

    #[rstest]
    fn last_representable_day_leaves_end_open() {
        let max = CalendarDate::from_naive(NaiveDate::MAX);
        let window = DateWindow::between(None, Some(max));
        assert_eq!(window.end_exclusive(), None);
        assert!(window.contains(max));
    }
}
