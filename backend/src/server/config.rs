//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use exercise_tracker::domain::ports::UsernamePolicy;
use exercise_tracker::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) username_policy: UsernamePolicy,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration backed by the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, username_policy: UsernamePolicy) -> Self {
        Self {
            bind_addr,
            username_policy,
            db_pool: None,
        }
    }

    /// Attach a database connection pool so the Diesel repositories replace
    /// the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether requests will be served from PostgreSQL.
    #[must_use]
    pub fn uses_database(&self) -> bool {
        self.db_pool.is_some()
    }
}
