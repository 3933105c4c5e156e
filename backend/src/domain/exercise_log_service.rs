//! Exercise log query service.
//!
//! Resolves the user, validates the date window, then asks the exercise
//! store for matches sorted by date ascending and already truncated to the
//! limit. The reported `count` always equals the number of returned entries.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::exercise_service::map_exercise_repository_error;
use crate::domain::ports::{
    ExerciseFilter, ExerciseLogQuery, ExerciseLogRequest, ExerciseRepository, UserRepository,
};
use crate::domain::user_lookup::resolve_user;
use crate::domain::{Error, ExerciseLog, LogCriteria};

/// Service implementing the exercise log driving port.
#[derive(Clone)]
pub struct ExerciseLogService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
}

impl<U, E> ExerciseLogService<U, E> {
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>) -> Self {
        Self {
            user_repo,
            exercise_repo,
        }
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn fetch_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error> {
        let user = resolve_user(self.user_repo.as_ref(), &request.user_id).await?;

        let criteria = LogCriteria::parse(
            request.from.as_deref(),
            request.to.as_deref(),
            request.limit.as_deref(),
        )
        .map_err(|err| {
            let field = err.field().as_str();
            warn!(user_id = %user.id(), field, input = err.input(), "rejected log query");
            Error::invalid_request(err.to_string())
                .with_details(json!({ "field": field, "code": "invalid_date" }))
        })?;

        if criteria.window().is_empty() {
            debug!(user_id = %user.id(), "log window is empty");
            return Ok(ExerciseLog::from_sorted(user, &[], criteria.limit()));
        }

        let filter = ExerciseFilter {
            user_id: *user.id(),
            window: criteria.window(),
            limit: criteria.limit(),
        };
        let exercises = self
            .exercise_repo
            .find_for_user(&filter)
            .await
            .map_err(map_exercise_repository_error)?;

        let log = ExerciseLog::from_sorted(user, &exercises, criteria.limit());
        debug!(user_id = %log.user().id(), count = log.count(), "fetched exercise log");
        Ok(log)
    }
}

#[cfg(test)]
#[path = "exercise_log_service_tests.rs"]
mod tests;
