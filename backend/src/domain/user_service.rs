//! User registration and listing services.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{CreateUserRequest, NewUser, UserRepository, UsersCommand, UsersQuery};
use crate::domain::user_lookup::map_user_repository_error;
use crate::domain::{Error, User, Username};

/// User service implementing the user command and query driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by `user_repo`.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let username = Username::new(request.username).map_err(|err| {
            warn!(field = "username", error = %err, "rejected user registration");
            Error::invalid_request(err.to_string())
                .with_details(json!({ "field": "username" }))
        })?;

        let user = self
            .user_repo
            .create(&NewUser { username })
            .await
            .map_err(map_user_repository_error)?;
        debug!(user_id = %user.id(), "registered user");
        Ok(user)
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo.list().await.map_err(map_user_repository_error)
    }
}
