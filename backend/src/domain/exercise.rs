//! Exercise entries logged against a user.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{CalendarDate, UserId};

/// Validation errors raised when building exercise components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("duration must be a positive whole number of minutes")]
    InvalidDuration,
}

/// Store-assigned exercise identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Trimmed, non-empty free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    pub fn new(value: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Largest accepted duration; the store keeps minutes as a signed 32-bit
/// integer.
pub const DURATION_MAX_MINUTES: u32 = i32::MAX as u32;

/// Positive duration in whole minutes.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::ExerciseDuration;
///
/// assert_eq!(ExerciseDuration::parse("30").map(|d| d.minutes()), Ok(30));
/// assert!(ExerciseDuration::parse("0").is_err());
/// assert!(ExerciseDuration::parse("1.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ExerciseDuration(u32);

impl ExerciseDuration {
    /// Validate a minute count.
    pub fn new(minutes: u32) -> Result<Self, ExerciseValidationError> {
        if minutes == 0 || minutes > DURATION_MAX_MINUTES {
            return Err(ExerciseValidationError::InvalidDuration);
        }
        Ok(Self(minutes))
    }

    /// Parse a decimal minute count such as a form field.
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        let minutes = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ExerciseValidationError::InvalidDuration)?;
        Self::new(minutes)
    }

    /// Number of minutes.
    pub const fn minutes(&self) -> u32 {
        self.0
    }
}

impl From<ExerciseDuration> for u32 {
    fn from(value: ExerciseDuration) -> Self {
        value.0
    }
}

impl TryFrom<u32> for ExerciseDuration {
    type Error = ExerciseValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A logged exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    id: ExerciseId,
    user_id: UserId,
    description: Description,
    duration: ExerciseDuration,
    date: CalendarDate,
}

impl Exercise {
    /// Assemble an exercise from validated parts.
    pub fn new(
        id: ExerciseId,
        user_id: UserId,
        description: Description,
        duration: ExerciseDuration,
        date: CalendarDate,
    ) -> Self {
        Self {
            id,
            user_id,
            description,
            duration,
            date,
        }
    }

    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    /// Owning user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn duration(&self) -> ExerciseDuration {
        self.duration
    }

    /// Calendar day the exercise was performed.
    pub fn date(&self) -> CalendarDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", ExerciseValidationError::EmptyDescription)]
    #[case("  ", ExerciseValidationError::EmptyDescription)]
    fn description_rejects_blank(#[case] raw: &str, #[case] expected: ExerciseValidationError) {
        assert_eq!(Description::new(raw), Err(expected));
    }

    #[rstest]
    fn description_accepts_long_free_text() {
        let raw = "x".repeat(4096);
        let description = Description::new(raw.clone()).expect("long description");
        assert_eq!(description.as_ref(), raw);
    }

    #[rstest]
    fn description_is_trimmed() {
        let description = Description::new(" run ").expect("valid description");
        assert_eq!(description.as_ref(), "run");
    }

    #[rstest]
    #[case("30", Some(30))]
    #[case(" 45 ", Some(45))]
    #[case("0", None)]
    #[case("-5", None)]
    #[case("2.5", None)]
    #[case("thirty", None)]
    #[case("", None)]
    #[case("2147483648", None)]
    #[case("2147483647", Some(2_147_483_647))]
    fn duration_parse(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(
            ExerciseDuration::parse(raw).ok().map(|d| d.minutes()),
            expected
        );
    }

    #[rstest]
    fn duration_deserialisation_rejects_zero() {
        let result: Result<ExerciseDuration, _> = serde_json::from_value(serde_json::json!(0));
        assert!(result.is_err());
    }
}
