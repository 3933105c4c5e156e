//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the username.
        DuplicateUsername { username: String } => "username `{username}` is already taken",
    }
}

/// Whether the store rejects a second user with the same username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernamePolicy {
    /// Usernames are unique; duplicates fail with
    /// [`UserRepositoryError::DuplicateUsername`].
    #[default]
    Unique,
    /// Duplicate usernames are accepted.
    Lenient,
}

impl UsernamePolicy {
    /// Map the boolean configuration flag onto a policy.
    pub const fn from_unique_flag(unique: bool) -> Self {
        if unique { Self::Unique } else { Self::Lenient }
    }
}

/// Validated input for creating a user. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, assigning a fresh identifier.
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// All users in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}
