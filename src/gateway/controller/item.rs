use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::Method,
    response::{IntoResponse, Response},
    Json,
};

use garde::Validate;

use crate::{
    api::SharerId,
    gateway::{client::ServerClient, error::GatewayError, state::GatewayState},
    model::{
        api::PageParams,
        comment::CreateCommentDto,
        item::{CreateItemDto, ItemDto, ItemSearchQuery, UpdateItemDto},
        validation::ValidationError,
    },
};

pub async fn create_item(
    State(state): State<GatewayState>,
    SharerId(owner_id): SharerId,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("Gateway POST /items by user {}", owner_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::POST, "/items", Some(owner_id))
                .json(&payload),
        )
        .await
}

pub async fn update_item(
    State(state): State<GatewayState>,
    SharerId(caller_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateItemDto>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Path(item_id) = path.map_err(ValidationError::from)?;
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("Gateway PATCH /items/{} by user {}", item_id, caller_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::PATCH, &format!("/items/{}", item_id), Some(caller_id))
                .json(&payload),
        )
        .await
}

pub async fn get_item(
    State(state): State<GatewayState>,
    SharerId(caller_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, GatewayError> {
    let Path(item_id) = path.map_err(ValidationError::from)?;
    tracing::info!("Gateway GET /items/{} by user {}", item_id, caller_id);

    let client = ServerClient::new(&state);
    client
        .forward(client.request(Method::GET, &format!("/items/{}", item_id), Some(caller_id)))
        .await
}

pub async fn get_user_items(
    State(state): State<GatewayState>,
    SharerId(owner_id): SharerId,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Response, GatewayError> {
    let Query(params) = params.map_err(ValidationError::from)?;
    params.page_request()?;

    tracing::info!("Gateway GET /items by user {}", owner_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::GET, "/items", Some(owner_id))
                .query(&params),
        )
        .await
}

/// Blank search text is answered here with an empty list.
pub async fn search_items(
    State(state): State<GatewayState>,
    SharerId(caller_id): SharerId,
    query: Result<Query<ItemSearchQuery>, QueryRejection>,
) -> Result<Response, GatewayError> {
    let Query(query) = query.map_err(ValidationError::from)?;
    PageParams::new(query.from, query.size).page_request()?;

    tracing::info!(
        "Gateway GET /items/search?text={} by user {}",
        query.text,
        caller_id
    );

    if query.text.trim().is_empty() {
        return Ok(Json(Vec::<ItemDto>::new()).into_response());
    }

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::GET, "/items/search", Some(caller_id))
                .query(&query),
        )
        .await
}

pub async fn add_comment(
    State(state): State<GatewayState>,
    SharerId(author_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Path(item_id) = path.map_err(ValidationError::from)?;
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("Gateway POST /items/{}/comment by user {}", item_id, author_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(
                    Method::POST,
                    &format!("/items/{}/comment", item_id),
                    Some(author_id),
                )
                .json(&payload),
        )
        .await
}
