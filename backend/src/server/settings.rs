//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TRACKER_*` environment variables and
//! optional configuration files, in that order of precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use exercise_tracker::domain::ports::UsernamePolicy;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Settings controlling the listener and the backing store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct AppSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// PostgreSQL connection string. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Reject a username that is already registered.
    #[ortho_config(default = true)]
    pub unique_usernames: bool,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

/// Raised when the configured host is not an IP address.
#[derive(Debug, Error)]
#[error("invalid host `{host}`: {source}")]
pub struct InvalidHostError {
    host: String,
    #[source]
    source: std::net::AddrParseError,
}

impl AppSettings {
    /// Socket address assembled from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidHostError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(host) => host.parse().map_err(|source| InvalidHostError {
                host: host.to_owned(),
                source,
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn username_policy(&self) -> UsernamePolicy {
        UsernamePolicy::from_unique_flag(self.unique_usernames)
    }

    /// Database URL with blank values treated as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "TRACKER_HOST",
        "TRACKER_PORT",
        "TRACKER_DATABASE_URL",
        "TRACKER_UNIQUE_USERNAMES",
        "TRACKER_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("exercise-tracker")])
            .expect("settings should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.username_policy(), UsernamePolicy::Unique);
        assert_eq!(settings.db_max_connections, 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRACKER_HOST", Some("127.0.0.1".to_owned())),
            ("TRACKER_PORT", Some("8088".to_owned())),
            (
                "TRACKER_DATABASE_URL",
                Some("postgres://tracker@localhost/tracker".to_owned()),
            ),
            ("TRACKER_UNIQUE_USERNAMES", Some("false".to_owned())),
            ("TRACKER_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("configured address"),
            SocketAddr::from(([127, 0, 0, 1], 8088))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://tracker@localhost/tracker")
        );
        assert_eq!(settings.username_policy(), UsernamePolicy::Lenient);
        assert_eq!(settings.db_max_connections, 4);
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env(VARS.map(|name| {
            let value = (name == "TRACKER_DATABASE_URL").then(|| "  ".to_owned());
            (name, value)
        }));

        assert_eq!(load_from_empty_args().database_url(), None);
    }

    #[rstest]
    fn invalid_host_is_reported() {
        let _guard = lock_env(VARS.map(|name| {
            let value = (name == "TRACKER_HOST").then(|| "not a host".to_owned());
            (name, value)
        }));

        let err = load_from_empty_args()
            .bind_addr()
            .expect_err("host is not an address");
        assert!(err.to_string().contains("not a host"));
    }
}
