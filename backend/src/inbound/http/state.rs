//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ExerciseCommand, ExerciseLogQuery, FixtureExerciseCommand, FixtureExerciseLogQuery,
    FixtureUsersCommand, FixtureUsersQuery, UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExerciseCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use exercise_tracker::domain::ports::{
    ///     FixtureExerciseCommand, FixtureExerciseLogQuery, FixtureUsersCommand,
    ///     FixtureUsersQuery,
    /// };
    /// use exercise_tracker::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureUsersCommand),
    ///     Arc::new(FixtureUsersQuery),
    ///     Arc::new(FixtureExerciseCommand),
    ///     Arc::new(FixtureExerciseLogQuery),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn new(
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
        exercises: Arc<dyn ExerciseCommand>,
        exercise_log: Arc<dyn ExerciseLogQuery>,
    ) -> Self {
        Self {
            users,
            users_query,
            exercises,
            exercise_log,
        }
    }

    /// State wired entirely to fixture ports.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureUsersCommand),
            Arc::new(FixtureUsersQuery),
            Arc::new(FixtureExerciseCommand),
            Arc::new(FixtureExerciseLogQuery),
        )
    }
}
