//! Exercise logging service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{
    AddExerciseRequest, AddExerciseResponse, ExerciseCommand, ExerciseRepository,
    ExerciseRepositoryError, NewExercise, UserRepository,
};
use crate::domain::user_lookup::{resolve_user, unknown_user};
use crate::domain::{CalendarDate, Description, Error, ExerciseDuration};

pub(crate) fn map_exercise_repository_error(error: ExerciseRepositoryError) -> Error {
    match error {
        ExerciseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("exercise repository unavailable: {message}"))
        }
        ExerciseRepositoryError::Query { message } => {
            Error::internal(format!("exercise repository error: {message}"))
        }
        ExerciseRepositoryError::UnknownUser { user_id } => unknown_user(&user_id.to_string()),
    }
}

fn invalid_field(field: &'static str, message: impl Into<String>) -> Error {
    let error = Error::invalid_request(message).with_details(json!({ "field": field }));
    warn!(field, error = %error, "rejected exercise");
    error
}

/// Exercise service implementing the exercise command driving port.
///
/// Requests without a date are logged on the clock's current UTC day.
#[derive(Clone)]
pub struct ExerciseService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseService<U, E> {
    /// Create a new service.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use exercise_tracker::domain::ExerciseService;
    /// # use exercise_tracker::outbound::memory::InMemoryStore;
    /// # use exercise_tracker::domain::ports::UsernamePolicy;
    /// let store = Arc::new(InMemoryStore::new(UsernamePolicy::Unique));
    /// let service = ExerciseService::new(store.clone(), store, Arc::new(DefaultClock));
    /// # let _ = service;
    /// ```
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            exercise_repo,
            clock,
        }
    }

    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(self.clock.utc().date_naive())
    }
}

#[async_trait]
impl<U, E> ExerciseCommand for ExerciseService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<AddExerciseResponse, Error> {
        let AddExerciseRequest {
            user_id,
            description,
            duration,
            date,
        } = request;

        let user = resolve_user(self.user_repo.as_ref(), &user_id).await?;

        let description =
            Description::new(description).map_err(|err| invalid_field("description", err.to_string()))?;
        let duration = ExerciseDuration::parse(&duration)
            .map_err(|err| invalid_field("duration", err.to_string()))?;
        let date = CalendarDate::parse_optional(date.as_deref())
            .map_err(|err| invalid_field("date", err.to_string()))?
            .unwrap_or_else(|| self.today());

        let exercise = self
            .exercise_repo
            .create(&NewExercise {
                user_id: *user.id(),
                description,
                duration,
                date,
            })
            .await
            .map_err(map_exercise_repository_error)?;
        debug!(user_id = %user.id(), exercise_id = %exercise.id(), "logged exercise");

        Ok(AddExerciseResponse { user, exercise })
    }
}

#[cfg(test)]
#[path = "exercise_service_tests.rs"]
mod tests;
