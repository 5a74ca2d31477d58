use std::net::SocketAddr;

use crate::config::{required_var, socket_addr_var, ConfigError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:9090";

/// Server configuration read from the environment.
pub struct Config {
    /// SeaORM connection string, e.g. `sqlite://shareit.db?mode=rwc`.
    pub database_url: String,
    pub server_addr: SocketAddr,
}

impl Config {
    /// Reads `DATABASE_URL` (required) and `SERVER_ADDR` (default `0.0.0.0:9090`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            server_addr: socket_addr_var("SERVER_ADDR", DEFAULT_SERVER_ADDR)?,
        })
    }
}
