//! Shared Diesel error mapping for the user and exercise repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(super) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map common Diesel error variants into query/connection constructors.
///
/// Driver messages are logged at debug level and replaced with fixed text so
/// SQL details never reach the domain layer.
pub(super) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::BrokenTransactionManager => connection("database transaction state lost"),
        _ => query("database error"),
    }
}

/// Whether `error` is a foreign key violation raised by the database.
pub(super) fn is_foreign_key_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(&'static str),
        Connection(String),
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_basic_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection("timed out".to_owned()));
    }

    #[rstest]
    fn not_found_becomes_query_error() {
        let mapped = map_basic_diesel_error(DieselError::NotFound, Mapped::Query, |message| {
            Mapped::Connection(message.to_owned())
        });
        assert_eq!(mapped, Mapped::Query("record not found"));
    }

    #[rstest]
    fn broken_transaction_becomes_connection_error() {
        let mapped = map_basic_diesel_error(
            DieselError::BrokenTransactionManager,
            Mapped::Query,
            |message| Mapped::Connection(message.to_owned()),
        );
        assert!(matches!(mapped, Mapped::Connection(_)));
    }

    #[rstest]
    fn plain_errors_are_not_foreign_key_violations() {
        assert!(!is_foreign_key_violation(&DieselError::NotFound));
    }
}
