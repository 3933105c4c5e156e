//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel ORM.
//!
//! The date window, ordering and limit are all pushed into SQL. Rows are
//! ordered by `(date, seq)` so same-day exercises keep insertion order.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{
    ExerciseFilter, ExerciseRepository, ExerciseRepositoryError, NewExercise,
};
use crate::domain::{CalendarDate, Description, Exercise, ExerciseDuration, ExerciseId, UserId};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel-backed implementation of the exercise repository port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExerciseRepositoryError {
    map_basic_pool_error(error, ExerciseRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ExerciseRepositoryError {
    map_basic_diesel_error(
        error,
        ExerciseRepositoryError::query,
        ExerciseRepositoryError::connection,
    )
}

fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, ExerciseRepositoryError> {
    let ExerciseRow {
        id,
        user_id,
        description,
        duration,
        date,
    } = row;

    let description = Description::new(description)
        .map_err(|err| ExerciseRepositoryError::query(format!("stored description invalid: {err}")))?;
    let duration = u32::try_from(duration)
        .ok()
        .and_then(|minutes| ExerciseDuration::new(minutes).ok())
        .ok_or_else(|| ExerciseRepositoryError::query("stored duration is not positive"))?;

    Ok(Exercise::new(
        ExerciseId::from_uuid(id),
        UserId::from_uuid(user_id),
        description,
        duration,
        CalendarDate::from_naive(date),
    ))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, ExerciseRepositoryError> {
        let duration = i32::try_from(exercise.duration.minutes())
            .map_err(|_| ExerciseRepositoryError::query("duration exceeds storage range"))?;
        let new_row = NewExerciseRow {
            id: Uuid::new_v4(),
            user_id: *exercise.user_id.as_uuid(),
            description: exercise.description.as_ref(),
            duration,
            date: exercise.date.as_naive(),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(exercises::table)
            .values(&new_row)
            .returning(ExerciseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    ExerciseRepositoryError::unknown_user(exercise.user_id)
                } else {
                    map_diesel_error(err)
                }
            })?;
        row_to_exercise(row)
    }

    async fn find_for_user(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ExerciseRepositoryError> {
        let mut query = exercises::table
            .filter(exercises::user_id.eq(*filter.user_id.as_uuid()))
            .order((exercises::date.asc(), exercises::seq.asc()))
            .select(ExerciseRow::as_select())
            .into_boxed();
        if let Some(start) = filter.window.start() {
            query = query.filter(exercises::date.ge(start));
        }
        if let Some(end) = filter.window.end_exclusive() {
            query = query.filter(exercises::date.lt(end));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(i64::try_from(limit.get()).unwrap_or(i64::MAX));
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_exercise).collect()
    }
}
