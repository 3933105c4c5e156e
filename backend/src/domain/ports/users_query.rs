//! Driving port for user-facing queries.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch user-visible data
//! without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, Username};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered user, in registration order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}

/// Fixture users query returning a single known user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        const FIXTURE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        const FIXTURE_USERNAME: &str = "ada";

        // These values are compile-time constants; surface invalid data as an
        // internal error so automated checks catch accidental regressions.
        let id = UserId::new(FIXTURE_ID)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
        let username = Username::new(FIXTURE_USERNAME)
            .map_err(|err| Error::internal(format!("invalid fixture username: {err}")))?;
        Ok(vec![User::new(id, username)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_users_query_returns_expected_user() {
        let users = FixtureUsersQuery.list_users().await.expect("users list");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username().as_ref(), "ada");
    }
}
