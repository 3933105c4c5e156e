//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Under [`UsernamePolicy::Unique`] each create runs in a transaction that
//! first takes a transaction-scoped advisory lock keyed on the username, so
//! concurrent registrations of the same name are serialised without a unique
//! index on the column.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{NewUser, UserRepository, UserRepositoryError, UsernamePolicy};
use crate::domain::{User, UserId, Username};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

const LOCK_USERNAME_SQL: &str = "SELECT pg_advisory_xact_lock(hashtext($1))";

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
    policy: UsernamePolicy,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool, policy: UsernamePolicy) -> Self {
        Self { pool, policy }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let username = Username::new(row.username)
        .map_err(|err| UserRepositoryError::query(format!("stored username invalid: {err}")))?;
    Ok(User::new(UserId::from_uuid(row.id), username))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let username = user.username.as_ref();
        let new_row = NewUserRow {
            id: Uuid::new_v4(),
            username,
        };
        let enforce_unique = self.policy == UsernamePolicy::Unique;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // `None` signals the username is already taken.
        let inserted: Option<UserRow> = conn
            .transaction(|conn| {
                async move {
                    if enforce_unique {
                        sql_query(LOCK_USERNAME_SQL)
                            .bind::<Text, _>(username)
                            .execute(conn)
                            .await?;
                        let taken: bool = diesel::select(diesel::dsl::exists(
                            users::table.filter(users::username.eq(username)),
                        ))
                        .get_result(conn)
                        .await?;
                        if taken {
                            return Ok(None);
                        }
                    }

                    diesel::insert_into(users::table)
                        .values(&new_row)
                        .returning(UserRow::as_returning())
                        .get_result(conn)
                        .await
                        .map(Some)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        match inserted {
            Some(row) => row_to_user(row),
            None => Err(UserRepositoryError::duplicate_username(username)),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::id.eq(*id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = users::table
            .order(users::seq.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_user).collect()
    }
}
