//! Driving port for reading a user's exercise log.

use async_trait::async_trait;

use crate::domain::{Error, ExerciseLog, LogCriteria, User, UserId, Username};

/// Raw log request as received from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    pub user_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Fetch the user's log filtered by date window and truncated by limit.
    ///
    /// Fails with `not_found` when the user does not resolve and with
    /// `invalid_request` when `from` or `to` is present but unparseable.
    async fn fetch_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error>;
}

/// Fixture query returning an empty log for any well-formed user id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureExerciseLogQuery;

#[async_trait]
impl ExerciseLogQuery for FixtureExerciseLogQuery {
    async fn fetch_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error> {
        let user_id = UserId::new(&request.user_id)
            .map_err(|_| Error::not_found(format!("unknown user: {}", request.user_id)))?;
        let criteria = LogCriteria::parse(
            request.from.as_deref(),
            request.to.as_deref(),
            request.limit.as_deref(),
        )
        .map_err(|err| Error::invalid_request(err.to_string()))?;
        let username = Username::new("ada")
            .map_err(|err| Error::internal(format!("invalid fixture username: {err}")))?;
        Ok(ExerciseLog::from_sorted(
            User::new(user_id, username),
            &[],
            criteria.limit(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_query_returns_empty_log() {
        let log = FixtureExerciseLogQuery
            .fetch_log(ExerciseLogRequest {
                user_id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
                ..ExerciseLogRequest::default()
            })
            .await
            .expect("fixture log");
        assert_eq!(log.count(), 0);
        assert_eq!(log.user().username().as_ref(), "ada");
    }
}
