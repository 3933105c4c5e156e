//! Embedded schema migrations applied at startup.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while bringing the schema up to date.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("could not connect to run migrations: {0}")]
    Connect(String),
    #[error("migration failed: {0}")]
    Apply(String),
    #[error("migration task aborted: {0}")]
    Join(String),
}

/// Apply every pending migration.
///
/// Migrations use a synchronous connection, so the work runs on the blocking
/// thread pool.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn =
            PgConnection::establish(&url).map_err(|err| MigrationError::Connect(err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply(err.to_string()))?;
        for version in applied {
            info!(%version, "applied migration");
        }
        Ok(())
    })
    .await
    .map_err(|err| MigrationError::Join(err.to_string()))?
}
