//! Port abstraction for exercise persistence adapters.
//!
//! `find_for_user` carries the whole filter so adapters can push the date
//! window, ordering and limit down into the store.

use async_trait::async_trait;

use crate::domain::{CalendarDate, DateWindow, Description, Exercise, ExerciseDuration, LogLimit, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exercise repository adapters.
    pub enum ExerciseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "exercise repository query failed: {message}",
        /// The owning user does not exist.
        UnknownUser { user_id: UserId } => "user {user_id} does not exist",
    }
}

/// Validated input for logging an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub user_id: UserId,
    pub description: Description,
    pub duration: ExerciseDuration,
    pub date: CalendarDate,
}

/// Selection of a user's exercises.
///
/// Adapters return matches sorted by date ascending, ties in insertion
/// order, and keep only the first `limit` rows when one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub user_id: UserId,
    pub window: DateWindow,
    pub limit: Option<LogLimit>,
}

impl ExerciseFilter {
    /// Every exercise for `user_id`.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            window: DateWindow::unbounded(),
            limit: None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Insert an exercise, assigning a fresh identifier.
    ///
    /// Fails with [`ExerciseRepositoryError::UnknownUser`] when the owning
    /// user is missing at insertion time.
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, ExerciseRepositoryError>;

    /// Exercises matching `filter`, earliest first.
    async fn find_for_user(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ExerciseRepositoryError>;
}
