//! HTTP plumbing shared by the server and the gateway.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequestParts,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::model::{
    api::{ErrorDto, SHARER_ID_HEADER},
    validation::ValidationError,
};

/// Id of the calling user, read from the `X-Sharer-User-Id` header.
///
/// Rejects with 400 when the header is missing or not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerId(pub i32);

impl<S> FromRequestParts<S> for SharerId
where
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_ID_HEADER)
            .ok_or(ValidationError::MissingHeader(SHARER_ID_HEADER))?;

        value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .map(SharerId)
            .ok_or(ValidationError::InvalidHeader(SHARER_ID_HEADER))
    }
}

/// Builds a JSON error response with the flat `{reason, error}` body.
pub fn error_response(
    status: StatusCode,
    reason: impl Into<String>,
    error: impl Into<String>,
) -> Response {
    (status, Json(ErrorDto::new(reason, error))).into_response()
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let reason = self.reason();
        let error = self.to_string();

        tracing::warn!("{} : {}", reason, error);

        error_response(StatusCode::BAD_REQUEST, reason, error)
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ValidationError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};

    async fn extract(request: Request<Body>) -> Result<SharerId, ValidationError> {
        let (mut parts, _) = request.into_parts();
        SharerId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn reads_sharer_id_header() {
        let request = Request::builder()
            .header(SHARER_ID_HEADER, "42")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract(request).await.unwrap(), SharerId(42));
    }

    #[tokio::test]
    async fn header_name_is_case_insensitive() {
        let request = Request::builder()
            .header("x-sharer-user-id", "7")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract(request).await.unwrap(), SharerId(7));
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let request = Request::builder().body(Body::empty()).unwrap();

        let err = extract(request).await.unwrap_err();

        assert_eq!(err, ValidationError::MissingHeader(SHARER_ID_HEADER));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_header_is_rejected() {
        let request = Request::builder()
            .header(SHARER_ID_HEADER, "abc")
            .body(Body::empty())
            .unwrap();

        assert_eq!(
            extract(request).await.unwrap_err(),
            ValidationError::InvalidHeader(SHARER_ID_HEADER)
        );
    }
}
