//! Driving port for user registration.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, Username};

/// Request to register a user. The username is validated by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub username: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user and return it with its store-assigned identifier.
    ///
    /// Fails with `invalid_request` for a blank or overlong username and
    /// with `conflict` when the username is taken under a unique policy.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;
}

/// Fixture command that validates the username and assigns a fixed id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersCommand;

/// Identifier assigned by [`FixtureUsersCommand`].
pub const FIXTURE_USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[async_trait]
impl UsersCommand for FixtureUsersCommand {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let id = UserId::new(FIXTURE_USER_ID)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
        let username = Username::new(request.username)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(User::new(id, username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_command_assigns_fixed_id() {
        let user = FixtureUsersCommand
            .create_user(CreateUserRequest {
                username: "alice".to_owned(),
            })
            .await
            .expect("fixture create succeeds");

        assert_eq!(user.id().to_string(), FIXTURE_USER_ID);
        assert_eq!(user.username().as_ref(), "alice");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_command_rejects_blank_username() {
        let err = FixtureUsersCommand
            .create_user(CreateUserRequest {
                username: " ".to_owned(),
            })
            .await
            .expect_err("blank username");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
