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
        comment::{CommentDto, CreateCommentDto},
        item::{CreateItemDto, ItemDto, ItemExtraInfoDto, ItemSearchQuery, UpdateItemDto},
        validation::ValidationError,
    },
    server::{
        error::AppError,
        model::{
            comment::CreateCommentParams,
            item::{CreateItemParams, ItemPatch},
        },
        service::item::ItemService,
        state::AppState,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// List a new item owned by the caller.
///
/// # Returns
/// - `201 Created` - The created item
/// - `400 Bad Request` - Blank name/description or missing header
/// - `404 Not Found` - Owner or referenced request does not exist
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEM_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")),
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 404, description = "Owner or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    SharerId(owner_id): SharerId,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("POST /items by user {}", owner_id);

    let item = ItemService::new(&state.db)
        .create(CreateItemParams::from_dto(owner_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Partially update an item. Only its owner may do so.
///
/// # Returns
/// - `200 OK` - The updated item
/// - `403 Forbidden` - Caller is not the owner
/// - `404 Not Found` - Item or caller does not exist
#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Item or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    SharerId(caller_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(item_id) = path.map_err(ValidationError::from)?;
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("PATCH /items/{} by user {}", item_id, caller_id);

    let item = ItemService::new(&state.db)
        .update(item_id, caller_id, ItemPatch::from_dto(payload))
        .await?;

    Ok(Json(item.into_dto()))
}

/// Get an item with its comments.
///
/// The owner additionally sees the last and next approved bookings.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemExtraInfoDto),
        (status = 404, description = "Item or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    SharerId(caller_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(item_id) = path.map_err(ValidationError::from)?;
    tracing::info!("GET /items/{} by user {}", item_id, caller_id);

    let item = ItemService::new(&state.db)
        .get_by_id(item_id, caller_id)
        .await?;

    Ok(Json(item.into_dto()))
}

/// List the caller's items ordered by ID.
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("from" = Option<i64>, Query, description = "Index of the first element"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "The caller's items", body = Vec<ItemExtraInfoDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_items(
    State(state): State<AppState>,
    SharerId(owner_id): SharerId,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(ValidationError::from)?;
    let page = params.page_request()?;

    tracing::info!("GET /items by user {}", owner_id);

    let items = ItemService::new(&state.db)
        .get_by_owner(owner_id, page)
        .await?;

    Ok(Json(
        items
            .into_iter()
            .map(|item| item.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Search available items by name or description.
///
/// Matching is a case-insensitive substring match; a blank `text` yields an empty list.
#[utoipa::path(
    get,
    path = "/items/search",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("text" = String, Query, description = "Text to look for"),
        ("from" = Option<i64>, Query, description = "Index of the first element"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Matching available items", body = Vec<ItemDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    SharerId(caller_id): SharerId,
    query: Result<Query<ItemSearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(ValidationError::from)?;
    let page = PageParams::new(query.from, query.size).page_request()?;

    tracing::info!("GET /items/search?text={} by user {}", query.text, caller_id);

    let items = ItemService::new(&state.db)
        .search(&query.text, page)
        .await?;

    Ok(Json(
        items
            .into_iter()
            .map(|item| item.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Comment on an item the caller has rented before.
///
/// # Returns
/// - `201 Created` - The stored comment
/// - `400 Bad Request` - Blank text, or no finished approved booking of the item
/// - `404 Not Found` - Item or author does not exist
#[utoipa::path(
    post,
    path = "/items/{item_id}/comment",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully added comment", body = CommentDto),
        (status = 400, description = "Blank text or item was not rented", body = ErrorDto),
        (status = 404, description = "Item or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    SharerId(author_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(item_id) = path.map_err(ValidationError::from)?;
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("POST /items/{}/comment by user {}", item_id, author_id);

    let comment = ItemService::new(&state.db)
        .add_comment(CreateCommentParams {
            item_id,
            author_id,
            text: payload.text,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}
