//! Tests for the exercise log query service.

use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::{ExerciseRepositoryError, MockExerciseRepository, MockUserRepository};
use crate::domain::{
    CalendarDate, Description, ErrorCode, Exercise, ExerciseDuration, ExerciseId, User, UserId,
    Username,
};

#[fixture]
fn user() -> User {
    User::new(UserId::random(), Username::new("alice").expect("username"))
}

fn users_returning(user: &User) -> MockUserRepository {
    let mut repo = MockUserRepository::new();
    let found = user.clone();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(found)));
    repo
}

fn exercise(user: &User, description: &str, minutes: u32, date: &str) -> Exercise {
    Exercise::new(
        ExerciseId::random(),
        *user.id(),
        Description::new(description).expect("description"),
        ExerciseDuration::new(minutes).expect("duration"),
        date.parse::<CalendarDate>().expect("date"),
    )
}

fn request(user: &User) -> ExerciseLogRequest {
    ExerciseLogRequest {
        user_id: user.id().to_string(),
        ..ExerciseLogRequest::default()
    }
}

#[rstest]
#[tokio::test]
async fn fetch_log_formats_entries(user: User) {
    let stored = vec![exercise(&user, "run", 30, "2023-01-05")];
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_find_for_user()
        .times(1)
        .return_once(move |_| Ok(stored));
    let service = ExerciseLogService::new(Arc::new(users_returning(&user)), Arc::new(exercises));

    let log = service.fetch_log(request(&user)).await.expect("log");

    assert_eq!(log.user(), &user);
    assert_eq!(log.count(), 1);
    let entry = &log.entries()[0];
    assert_eq!(entry.description, "run");
    assert_eq!(entry.duration, 30);
    assert_eq!(entry.date.to_string(), "Thu Jan 05 2023");
}

#[rstest]
#[tokio::test]
async fn fetch_log_passes_window_and_limit_to_store(user: User) {
    let user_id = *user.id();
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_find_for_user()
        .withf(move |filter| {
            let from: CalendarDate = "2023-01-01".parse().expect("date");
            let to: CalendarDate = "2023-01-31".parse().expect("date");
            filter.user_id == user_id
                && filter.window == crate::domain::DateWindow::between(Some(from), Some(to))
                && filter.limit.map(|l| l.get()) == Some(2)
        })
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    let service = ExerciseLogService::new(Arc::new(users_returning(&user)), Arc::new(exercises));

    let log = service
        .fetch_log(ExerciseLogRequest {
            from: Some("2023-01-01".to_owned()),
            to: Some("2023-01-31".to_owned()),
            limit: Some("2".to_owned()),
            ..request(&user)
        })
        .await
        .expect("log");

    assert_eq!(log.count(), 0);
}

#[rstest]
#[tokio::test]
async fn count_reflects_truncation_when_store_over_returns(user: User) {
    let stored = vec![
        exercise(&user, "a", 10, "2023-01-01"),
        exercise(&user, "b", 20, "2023-01-02"),
        exercise(&user, "c", 30, "2023-01-03"),
    ];
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_find_for_user()
        .times(1)
        .return_once(move |_| Ok(stored));
    let service = ExerciseLogService::new(Arc::new(users_returning(&user)), Arc::new(exercises));

    let log = service
        .fetch_log(ExerciseLogRequest {
            limit: Some("2".to_owned()),
            ..request(&user)
        })
        .await
        .expect("log");

    assert_eq!(log.count(), 2);
    assert_eq!(log.entries()[1].description, "b");
}

#[rstest]
#[case(Some("not-a-date"), None, "from")]
#[case(None, Some("2023-13-01"), "to")]
#[tokio::test]
async fn malformed_dates_are_rejected_without_querying(
    user: User,
    #[case] from: Option<&str>,
    #[case] to: Option<&str>,
    #[case] field: &str,
) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_find_for_user().times(0);
    let service = ExerciseLogService::new(Arc::new(users_returning(&user)), Arc::new(exercises));

    let err = service
        .fetch_log(ExerciseLogRequest {
            from: from.map(str::to_owned),
            to: to.map(str::to_owned),
            ..request(&user)
        })
        .await
        .expect_err("malformed date");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details(),
        Some(&json!({ "field": field, "code": "invalid_date" }))
    );
}

#[rstest]
#[tokio::test]
async fn unknown_user_wins_over_malformed_dates() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(1).return_once(|_| Ok(None));
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_find_for_user().times(0);
    let service = ExerciseLogService::new(Arc::new(users), Arc::new(exercises));

    let err = service
        .fetch_log(ExerciseLogRequest {
            user_id: UserId::random().to_string(),
            from: Some("garbage".to_owned()),
            ..ExerciseLogRequest::default()
        })
        .await
        .expect_err("unknown user");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn inverted_window_returns_empty_log_without_querying(user: User) {
    let mut exercises = MockExerciseRepository::new();
    exercises.expect_find_for_user().times(0);
    let service = ExerciseLogService::new(Arc::new(users_returning(&user)), Arc::new(exercises));

    let log = service
        .fetch_log(ExerciseLogRequest {
            from: Some("2023-02-01".to_owned()),
            to: Some("2023-01-01".to_owned()),
            ..request(&user)
        })
        .await
        .expect("empty log");

    assert_eq!(log.count(), 0);
}

#[rstest]
#[tokio::test]
async fn store_connection_failure_is_service_unavailable(user: User) {
    let mut exercises = MockExerciseRepository::new();
    exercises
        .expect_find_for_user()
        .times(1)
        .return_once(|_| Err(ExerciseRepositoryError::connection("pool timed out")));
    let service = ExerciseLogService::new(Arc::new(users_returning(&user)), Arc::new(exercises));

    let err = service.fetch_log(request(&user)).await.expect_err("unavailable");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
