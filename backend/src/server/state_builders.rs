//! Builders wiring repositories into the HTTP state ports.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use exercise_tracker::domain::ports::{ExerciseRepository, UserRepository};
use exercise_tracker::domain::{ExerciseLogService, ExerciseService, UserService};
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::InMemoryStore;
use exercise_tracker::outbound::persistence::{DieselExerciseRepository, DieselUserRepository};

use super::ServerConfig;

/// Wire the domain services over one pair of repositories.
///
/// The user and exercise ports may be the same store instance.
pub(crate) fn http_state_from_repositories<U, E>(
    users: Arc<U>,
    exercises: Arc<E>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    E: ExerciseRepository + 'static,
{
    let user_service = Arc::new(UserService::new(users.clone()));
    HttpState::new(
        user_service.clone(),
        user_service,
        Arc::new(ExerciseService::new(users.clone(), exercises.clone(), clock)),
        Arc::new(ExerciseLogService::new(users, exercises)),
    )
}

/// Build HTTP state from the configured store.
///
/// Uses the Diesel repositories when a pool is configured, otherwise a
/// fresh in-memory store.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => http_state_from_repositories(
            Arc::new(DieselUserRepository::new(pool.clone(), config.username_policy)),
            Arc::new(DieselExerciseRepository::new(pool.clone())),
            clock,
        ),
        None => {
            let store = Arc::new(InMemoryStore::new(config.username_policy));
            http_state_from_repositories(store.clone(), store, clock)
        }
    }
}
