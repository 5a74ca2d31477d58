//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type of the server. It wraps the domain-specific error
//! enums and implements `IntoResponse`, so every handler can return `Result<_, AppError>`
//! and have failures rendered as the flat `{reason, error}` body with the right status.

pub mod access;
pub mod booking;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    api::error_response,
    config::ConfigError,
    model::validation::ValidationError,
    server::error::{access::AccessError, booking::BookingError, internal::InternalError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain errors (`BookingError`,
/// `AccessError`, `ValidationError`) render their own responses, while infrastructure
/// errors are logged and hidden behind a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Malformed request, rendered as 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Booking rule violation, rendered as 400 Bad Request.
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Caller lacks rights on the resource, rendered as 403 Forbidden.
    #[error(transparent)]
    AccessErr(#[from] AccessError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected state inside the server.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Failure binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Referenced resource does not exist. Results in 404 Not Found.
    ///
    /// # Fields
    /// - `entity` - Resource kind, e.g. `"User"`
    /// - `id` - Identifier that was looked up
    #[error("{entity} with id {id} does not exist!")]
    NotFound { entity: &'static str, id: i32 },

    /// Unique constraint clash, such as an e-mail already in use. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    pub fn user_not_found(id: i32) -> Self {
        Self::NotFound { entity: "User", id }
    }

    pub fn item_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Item", id }
    }

    pub fn booking_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Booking",
            id,
        }
    }

    pub fn request_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Item request",
            id,
        }
    }
}

impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        Self::ValidationErr(report.into())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `ValidationErr`, `BookingErr`
/// - 403 Forbidden - `AccessErr`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict`
/// - 500 Internal Server Error - every infrastructure error, with a generic body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::AccessErr(err) => err.into_response(),
            Self::NotFound { entity, .. } => {
                let reason = format!("{} repository", entity);
                let error = self.to_string();
                tracing::warn!("{} : {}", reason, error);
                error_response(StatusCode::NOT_FOUND, reason, error)
            }
            Self::Conflict(msg) => {
                tracing::warn!("Conflict : {}", msg);
                error_response(StatusCode::CONFLICT, "Conflict", msg)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full message and returns a generic body so implementation details do not leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "Internal server error",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::api::ErrorDto;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorDto {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_names_the_repository() {
        let response = AppError::user_not_found(5).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert_eq!(body.reason, "User repository");
        assert_eq!(body.error, "User with id 5 does not exist!");
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let response = AppError::Conflict("taken".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn database_errors_are_hidden() {
        let response = AppError::DbErr(sea_orm::DbErr::Custom("secret".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert!(!body.error.contains("secret"));
    }
}
