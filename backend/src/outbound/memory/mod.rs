//! In-memory store implementing the user and exercise repository ports.
//!
//! Used by tests and when the server starts without a database URL. Both
//! collections live behind one [`RwLock`] so a user's existence and a new
//! exercise are checked and inserted atomically. Vectors keep insertion
//! order, which is the tie-break for exercises logged on the same day.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    ExerciseFilter, ExerciseRepository, ExerciseRepositoryError, NewExercise, NewUser,
    UserRepository, UserRepositoryError, UsernamePolicy,
};
use crate::domain::{Exercise, ExerciseId, User, UserId};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Process-local store of users and exercises.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    policy: UsernamePolicy,
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Create an empty store enforcing `policy` on usernames.
    pub fn new(policy: UsernamePolicy) -> Self {
        Self {
            policy,
            tables: RwLock::new(Tables::default()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let mut tables = self.tables.write().await;
        if self.policy == UsernamePolicy::Unique
            && tables
                .users
                .iter()
                .any(|existing| existing.username() == &user.username)
        {
            return Err(UserRepositoryError::duplicate_username(
                user.username.as_ref(),
            ));
        }
        let created = User::new(UserId::random(), user.username.clone());
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.tables.read().await.users.clone())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, ExerciseRepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.users.iter().any(|user| user.id() == &exercise.user_id) {
            return Err(ExerciseRepositoryError::unknown_user(exercise.user_id));
        }
        let created = Exercise::new(
            ExerciseId::random(),
            exercise.user_id,
            exercise.description.clone(),
            exercise.duration,
            exercise.date,
        );
        tables.exercises.push(created.clone());
        Ok(created)
    }

    async fn find_for_user(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ExerciseRepositoryError> {
        let tables = self.tables.read().await;
        let mut matches: Vec<Exercise> = tables
            .exercises
            .iter()
            .filter(|exercise| {
                exercise.user_id() == &filter.user_id && filter.window.contains(exercise.date())
            })
            .cloned()
            .collect();
        // Stable sort keeps insertion order among equal dates.
        matches.sort_by_key(Exercise::date);
        if let Some(limit) = filter.limit {
            matches.truncate(limit.get());
        }
        Ok(matches)
    }
}
