//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between internal Diesel rows
//! (`models.rs`, `schema.rs`) and domain types. They hold no business logic;
//! every database failure is mapped to the port's error enum.
//!
//! ```ignore
//! use exercise_tracker::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//! use exercise_tracker::domain::ports::UsernamePolicy;
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tracker")).await?;
//! let users = DieselUserRepository::new(pool, UsernamePolicy::Unique);
//! ```

mod diesel_basic_error_mapping;
mod diesel_exercise_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_exercise_repository::DieselExerciseRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
