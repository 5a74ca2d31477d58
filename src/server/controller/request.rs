use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use garde::Validate;

use crate::{
    api::SharerId,
    model::{
        api::{ErrorDto, PageParams},
        request::{CreateItemRequestDto, ItemRequestDto},
        validation::ValidationError,
    },
    server::{
        error::AppError,
        model::request::{CreateItemRequestParams, ItemRequestWithItems},
        service::request::ItemRequestService,
        state::AppState,
    },
};

/// Tag for grouping item request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

fn into_dtos(requests: Vec<ItemRequestWithItems>) -> Vec<ItemRequestDto> {
    requests
        .into_iter()
        .map(|request| request.into_dto())
        .collect()
}

/// Ask the community for an item nobody lists yet.
///
/// # Returns
/// - `201 Created` - The created request
/// - `400 Bad Request` - Blank description
/// - `404 Not Found` - The caller does not exist
#[utoipa::path(
    post,
    path = "/requests",
    tag = REQUEST_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")),
    request_body = CreateItemRequestDto,
    responses(
        (status = 201, description = "Successfully created request", body = ItemRequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    payload: Result<Json<CreateItemRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("POST /requests by user {}", user_id);

    let request = ItemRequestService::new(&state.db)
        .create(CreateItemRequestParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List the caller's own requests, newest first.
#[utoipa::path(
    get,
    path = "/requests",
    tag = REQUEST_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")),
    responses(
        (status = 200, description = "The caller's requests", body = Vec<ItemRequestDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /requests by user {}", user_id);

    let requests = ItemRequestService::new(&state.db).get_own(user_id).await?;

    Ok(Json(into_dtos(requests)))
}

/// List requests posted by other users, newest first.
#[utoipa::path(
    get,
    path = "/requests/all",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("from" = Option<i64>, Query, description = "Index of the first element"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Other users' requests", body = Vec<ItemRequestDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_other_requests(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(ValidationError::from)?;
    let page = params.page_request()?;

    tracing::info!("GET /requests/all by user {}", user_id);

    let requests = ItemRequestService::new(&state.db)
        .get_others(user_id, page)
        .await?;

    Ok(Json(into_dtos(requests)))
}

#[utoipa::path(
    get,
    path = "/requests/{request_id}",
    tag = REQUEST_TAG,
    params(
        ("request_id" = i32, Path, description = "Item request ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    responses(
        (status = 200, description = "Request found", body = ItemRequestDto),
        (status = 404, description = "Request or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(request_id) = path.map_err(ValidationError::from)?;
    tracing::info!("GET /requests/{} by user {}", request_id, user_id);

    let request = ItemRequestService::new(&state.db)
        .get_by_id(request_id, user_id)
        .await?;

    Ok(Json(request.into_dto()))
}
