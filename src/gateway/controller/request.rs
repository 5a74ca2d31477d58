use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::Method,
    response::Response,
    Json,
};

use garde::Validate;

use crate::{
    api::SharerId,
    gateway::{client::ServerClient, error::GatewayError, state::GatewayState},
    model::{
        api::PageParams,
        request::CreateItemRequestDto,
        validation::ValidationError,
    },
};

pub async fn create_request(
    State(state): State<GatewayState>,
    SharerId(user_id): SharerId,
    payload: Result<Json<CreateItemRequestDto>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("Gateway POST /requests by user {}", user_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::POST, "/requests", Some(user_id))
                .json(&payload),
        )
        .await
}

pub async fn get_own_requests(
    State(state): State<GatewayState>,
    SharerId(user_id): SharerId,
) -> Result<Response, GatewayError> {
    tracing::info!("Gateway GET /requests by user {}", user_id);

    let client = ServerClient::new(&state);
    client
        .forward(client.request(Method::GET, "/requests", Some(user_id)))
        .await
}

pub async fn get_other_requests(
    State(state): State<GatewayState>,
    SharerId(user_id): SharerId,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Response, GatewayError> {
    let Query(params) = params.map_err(ValidationError::from)?;
    params.page_request()?;

    tracing::info!("Gateway GET /requests/all by user {}", user_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::GET, "/requests/all", Some(user_id))
                .query(&params),
        )
        .await
}

pub async fn get_request(
    State(state): State<GatewayState>,
    SharerId(user_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, GatewayError> {
    let Path(request_id) = path.map_err(ValidationError::from)?;
    tracing::info!("Gateway GET /requests/{} by user {}", request_id, user_id);

    let client = ServerClient::new(&state);
    client
        .forward(client.request(
            Method::GET,
            &format!("/requests/{}", request_id),
            Some(user_id),
        ))
        .await
}
