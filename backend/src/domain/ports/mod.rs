//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_command;
mod exercise_log_query;
mod exercise_repository;
mod user_repository;
mod users_command;
mod users_query;

pub use exercise_command::{
    AddExerciseRequest, AddExerciseResponse, ExerciseCommand, FixtureExerciseCommand,
};
#[cfg(test)]
pub use exercise_command::MockExerciseCommand;
pub use exercise_log_query::{ExerciseLogQuery, ExerciseLogRequest, FixtureExerciseLogQuery};
#[cfg(test)]
pub use exercise_log_query::MockExerciseLogQuery;
pub use exercise_repository::{
    ExerciseFilter, ExerciseRepository, ExerciseRepositoryError, NewExercise,
};
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
pub use user_repository::{NewUser, UserRepository, UserRepositoryError, UsernamePolicy};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use users_command::{CreateUserRequest, FIXTURE_USER_ID, FixtureUsersCommand, UsersCommand};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_query::{FixtureUsersQuery, UsersQuery};
#[cfg(test)]
pub use users_query::MockUsersQuery;
