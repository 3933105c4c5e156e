//! Exercise tracker entry-point: loads settings, selects the store and
//! serves the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{AppSettings, ServerConfig, create_server, fail_liveness_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = build_server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(fail_liveness_on(
        actix_web::rt::signal::ctrl_c(),
        health_state,
    ));
    server.await
}

/// Resolve the bind address and connect the configured store.
async fn build_server_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let config = ServerConfig::new(bind_addr, settings.username_policy());

    let Some(database_url) = settings.database_url() else {
        warn!("TRACKER_DATABASE_URL is not set; using the in-memory store");
        return Ok(config);
    };

    run_migrations(database_url)
        .await
        .map_err(|e| std::io::Error::other(format!("database migration failed: {e}")))?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections),
    )
    .await
    .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
    info!(
        max_connections = settings.db_max_connections,
        "connected to PostgreSQL"
    );

    Ok(config.with_db_pool(pool))
}
