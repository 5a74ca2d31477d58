use std::net::SocketAddr;

use crate::config::{required_var, socket_addr_var, ConfigError};

const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:8080";

/// Gateway configuration read from the environment.
pub struct GatewayConfig {
    /// Base URL of the ShareIt server without a trailing slash.
    pub server_url: String,
    pub gateway_addr: SocketAddr,
}

impl GatewayConfig {
    /// Reads `SHAREIT_SERVER_URL` (required) and `GATEWAY_ADDR` (default `0.0.0.0:8080`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server_url: required_var("SHAREIT_SERVER_URL")?
                .trim_end_matches('/')
                .to_string(),
            gateway_addr: socket_addr_var("GATEWAY_ADDR", DEFAULT_GATEWAY_ADDR)?,
        })
    }
}
