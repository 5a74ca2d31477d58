use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{api::error_response, config::ConfigError, model::validation::ValidationError};

/// Errors raised by the gateway itself. Failures of the server are relayed, not wrapped.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request rejected before forwarding. Results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// The server could not be reached or its response could not be read.
    /// Results in 502 Bad Gateway.
    #[error("ShareIt server unavailable: {0}")]
    UpstreamErr(#[from] reqwest::Error),

    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl From<garde::Report> for GatewayError {
    fn from(report: garde::Report) -> Self {
        Self::ValidationErr(report.into())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::UpstreamErr(err) => {
                tracing::error!("Upstream : {}", err);
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "Upstream",
                    "ShareIt server unavailable",
                )
            }
            err => {
                tracing::error!("{}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    "Internal server error",
                )
            }
        }
    }
}
