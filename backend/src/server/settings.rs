//! Service settings loaded via OrthoConfig.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_MIN_IDLE: u32 = 2;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Settings controlling the listener and the contact store backend.
///
/// Values come from CLI flags, `CONTACTS_*` environment variables, and
/// configuration files, in the usual OrthoConfig precedence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ServiceSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Idle connections the pool keeps open. Zero disables the floor.
    pub db_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection before the store reports it
    /// is unavailable.
    pub db_connection_timeout_secs: Option<u64>,
}

impl ServiceSettings {
    /// Return the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Return the pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Return the idle connection floor; `None` when configured as zero.
    pub fn db_min_idle(&self) -> Option<u32> {
        match self.db_min_idle.unwrap_or(DEFAULT_DB_MIN_IDLE) {
            0 => None,
            min_idle => Some(min_idle),
        }
    }

    /// Return the connection checkout timeout, falling back to the default.
    pub fn db_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connection_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS),
        )
    }
}
