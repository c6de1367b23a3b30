//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

use gazette_backend::outbound::persistence::{DEFAULT_DATABASE, DEFAULT_STORE_URL, StoreConfig};

/// Bind address used when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration for creating the HTTP server, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    store: StoreConfig,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to local
    /// defaults for anything unset.
    ///
    /// Recognised variables: `BIND_ADDR`, `MONGODB_URL`, `MONGODB_DATABASE`.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|e| {
            std::io::Error::other(format!("invalid BIND_ADDR {bind_raw}: {e}"))
        })?;

        let url = env::var("MONGODB_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.into());
        let database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.into());

        Ok(Self {
            bind_addr,
            store: StoreConfig::new(url, database),
        })
    }

    /// Socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Document store connection settings.
    pub fn store(&self) -> &StoreConfig {
        &self.store
    }
}
