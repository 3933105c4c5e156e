//! Driving port for logging exercises.

use async_trait::async_trait;

use crate::domain::{
    CalendarDate, Description, Error, Exercise, ExerciseDuration, ExerciseId, User, UserId,
    Username,
};

/// Raw request to log an exercise.
///
/// Fields arrive as the client sent them; the service validates each one and
/// reports the first failure with the offending field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseRequest {
    pub user_id: String,
    pub description: String,
    pub duration: String,
    /// Calendar day; absent or blank means today.
    pub date: Option<String>,
}

/// The stored exercise together with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseResponse {
    pub user: User,
    pub exercise: Exercise,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseCommand: Send + Sync {
    /// Log an exercise against an existing user.
    ///
    /// Fails with `not_found` when the user does not resolve and with
    /// `invalid_request` for an empty description, a non-positive duration
    /// or an unparseable date.
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<AddExerciseResponse, Error>;
}

/// Fixture command that validates input and echoes it back for a user
/// named `ada`. Requests without a date are logged on 2023-01-05.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureExerciseCommand;

#[async_trait]
impl ExerciseCommand for FixtureExerciseCommand {
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<AddExerciseResponse, Error> {
        let user_id = UserId::new(&request.user_id)
            .map_err(|_| Error::not_found(format!("unknown user: {}", request.user_id)))?;
        let username = Username::new("ada")
            .map_err(|err| Error::internal(format!("invalid fixture username: {err}")))?;
        let description = Description::new(request.description)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let duration = ExerciseDuration::parse(&request.duration)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let date = match CalendarDate::parse_optional(request.date.as_deref()) {
            Ok(Some(date)) => date,
            Ok(None) => CalendarDate::from_ymd(2023, 1, 5)
                .ok_or_else(|| Error::internal("invalid fixture date"))?,
            Err(err) => return Err(Error::invalid_request(err.to_string())),
        };

        Ok(AddExerciseResponse {
            user: User::new(user_id, username),
            exercise: Exercise::new(ExerciseId::random(), user_id, description, duration, date),
        })
    }
}
