//! Exercise log criteria and the formatted log returned to clients.

use std::num::NonZeroUsize;

use thiserror::Error;

use super::{CalendarDate, DateWindow, Exercise, User};

/// Positive cap on the number of log entries.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::LogLimit;
///
/// assert_eq!(LogLimit::parse(Some("2")).map(|l| l.get()), Some(2));
/// assert!(LogLimit::parse(Some("0")).is_none());
/// assert!(LogLimit::parse(Some("-1")).is_none());
/// assert!(LogLimit::parse(Some("ten")).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLimit(NonZeroUsize);

impl LogLimit {
    /// Construct a limit, returning `None` for zero.
    pub fn new(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    /// Read a raw query value. Anything that is not a positive integer means
    /// "no limit".
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .and_then(Self::new)
    }

    pub const fn get(&self) -> usize {
        self.0.get()
    }
}

/// Which date parameter failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    From,
    To,
}

impl DateField {
    /// Query parameter name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }
}

/// Raised when a log date parameter is present but unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} must be a calendar date, got `{input}`", .field.as_str())]
pub struct LogCriteriaError {
    field: DateField,
    input: String,
}

impl LogCriteriaError {
    pub fn field(&self) -> DateField {
        self.field
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }
}

/// Validated date window and limit for a log query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogCriteria {
    window: DateWindow,
    limit: Option<LogLimit>,
}

impl LogCriteria {
    pub fn new(window: DateWindow, limit: Option<LogLimit>) -> Self {
        Self { window, limit }
    }

    /// Parse raw `from`, `to` and `limit` query values.
    ///
    /// Blank dates count as absent. A malformed date is an error naming the
    /// field; a malformed limit is ignored.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::{DateField, LogCriteria};
    ///
    /// let criteria = LogCriteria::parse(Some("2023-01-01"), None, Some("5")).expect("valid");
    /// assert_eq!(criteria.limit().map(|l| l.get()), Some(5));
    ///
    /// let err = LogCriteria::parse(None, Some("soon"), None).expect_err("bad to");
    /// assert_eq!(err.field(), DateField::To);
    /// ```
    pub fn parse(
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, LogCriteriaError> {
        let from = parse_date(DateField::From, from)?;
        let to = parse_date(DateField::To, to)?;
        Ok(Self {
            window: DateWindow::between(from, to),
            limit: LogLimit::parse(limit),
        })
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    pub fn limit(&self) -> Option<LogLimit> {
        self.limit
    }
}

fn parse_date(field: DateField, raw: Option<&str>) -> Result<Option<CalendarDate>, LogCriteriaError> {
    CalendarDate::parse_optional(raw).map_err(|err| LogCriteriaError {
        field,
        input: err.input().to_owned(),
    })
}

/// One formatted line of the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogEntry {
    pub description: String,
    pub duration: u32,
    pub date: CalendarDate,
}

impl From<&Exercise> for ExerciseLogEntry {
    fn from(value: &Exercise) -> Self {
        Self {
            description: value.description().as_ref().to_owned(),
            duration: value.duration().minutes(),
            date: value.date(),
        }
    }
}

/// A user's filtered, truncated exercise log.
///
/// `count` is always derived from the entries held, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    user: User,
    entries: Vec<ExerciseLogEntry>,
}

impl ExerciseLog {
    /// Build a log from exercises already sorted by date ascending.
    ///
    /// `limit` keeps the earliest entries; the store normally applies it
    /// already, so this only guards against adapters returning extra rows.
    pub fn from_sorted(user: User, exercises: &[Exercise], limit: Option<LogLimit>) -> Self {
        let take = limit.map_or(exercises.len(), |l| l.get());
        let entries = exercises
            .iter()
            .take(take)
            .map(ExerciseLogEntry::from)
            .collect();
        Self { user, entries }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn entries(&self) -> &[ExerciseLogEntry] {
        &self.entries
    }

    /// Number of entries actually returned.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Description, ExerciseDuration, ExerciseId, UserId, Username};
    use rstest::{fixture, rstest};

    #[fixture]
    fn user() -> User {
        User::new(UserId::random(), Username::new("alice").expect("username"))
    }

    fn exercise(user: &User, description: &str, date: &str) -> Exercise {
        Exercise::new(
            ExerciseId::random(),
            *user.id(),
            Description::new(description).expect("description"),
            ExerciseDuration::new(30).expect("duration"),
            date.parse().expect("date"),
        )
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("3"), Some(3))]
    #[case(Some(" 7 "), Some(7))]
    #[case(Some("0"), None)]
    #[case(Some("-2"), None)]
    #[case(Some("1.5"), None)]
    #[case(Some(""), None)]
    fn limit_parse(#[case] raw: Option<&str>, #[case] expected: Option<usize>) {
        assert_eq!(LogLimit::parse(raw).map(|l| l.get()), expected);
    }

    #[rstest]
    #[case(Some("bogus"), None, DateField::From, "bogus")]
    #[case(None, Some("2023-02-30"), DateField::To, "2023-02-30")]
    #[case(Some("bad"), Some("worse"), DateField::From, "bad")]
    fn criteria_reports_first_invalid_field(
        #[case] from: Option<&str>,
        #[case] to: Option<&str>,
        #[case] field: DateField,
        #[case] input: &str,
    ) {
        let err = LogCriteria::parse(from, to, None).expect_err("invalid date");
        assert_eq!(err.field(), field);
        assert_eq!(err.input(), input);
    }

    #[rstest]
    fn criteria_error_message_names_field() {
        let err = LogCriteria::parse(Some("not-a-date"), None, None).expect_err("invalid");
        assert_eq!(
            err.to_string(),
            "from must be a calendar date, got `not-a-date`"
        );
    }

    #[rstest]
    fn criteria_ignores_blank_dates_and_bad_limit() {
        let criteria = LogCriteria::parse(Some(""), Some(" "), Some("x")).expect("valid");
        assert_eq!(criteria, LogCriteria::default());
    }

    #[rstest]
    fn log_count_matches_truncated_entries(user: User) {
        let exercises = vec![
            exercise(&user, "a", "2023-01-01"),
            exercise(&user, "b", "2023-01-02"),
            exercise(&user, "c", "2023-01-03"),
        ];
        let log = ExerciseLog::from_sorted(user, &exercises, LogLimit::new(2));

        assert_eq!(log.count(), 2);
        let names: Vec<_> = log.entries().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[rstest]
    fn log_without_limit_keeps_everything(user: User) {
        let exercises = vec![exercise(&user, "a", "2023-01-01")];
        let log = ExerciseLog::from_sorted(user, &exercises, None);
        assert_eq!(log.count(), 1);
        assert_eq!(log.entries()[0].date.to_string(), "Sun Jan 01 2023");
    }
}
