//! Environment helpers shared by the server and gateway configuration.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables each service needs.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}

/// Reads a variable that must be present.
pub fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a listen address, falling back to `default` when the variable is unset.
pub fn socket_addr_var(name: &str, default: &str) -> Result<SocketAddr, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
