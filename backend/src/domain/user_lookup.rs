//! Shared user resolution for services that act on a user path segment.

use serde_json::json;
use tracing::warn;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Error, User, UserId};

/// Map user repository failures onto domain errors.
pub(crate) fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::DuplicateUsername { username } => {
            Error::conflict(format!("username `{username}` is already taken")).with_details(
                json!({ "field": "username", "code": "duplicate_username" }),
            )
        }
    }
}

/// Error reported when `raw_id` does not name a registered user.
pub(crate) fn unknown_user(raw_id: &str) -> Error {
    Error::not_found(format!("unknown user: {raw_id}"))
        .with_details(json!({ "field": "_id", "code": "unknown_user" }))
}

/// Resolve a raw identifier to a stored user.
///
/// An identifier that is not a well-formed UUID cannot name any user, so it
/// is reported exactly like a missing one.
pub(crate) async fn resolve_user<R>(users: &R, raw_id: &str) -> Result<User, Error>
where
    R: UserRepository + ?Sized,
{
    let Ok(user_id) = UserId::new(raw_id) else {
        warn!(user_id = raw_id, "malformed user id");
        return Err(unknown_user(raw_id));
    };
    users
        .find_by_id(&user_id)
        .await
        .map_err(map_user_repository_error)?
        .ok_or_else(|| {
            warn!(%user_id, "user not found");
            unknown_user(raw_id)
        })
}
