use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use garde::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
        validation::ValidationError,
    },
    server::{
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Blank name or malformed e-mail
/// - `409 Conflict` - The e-mail is already registered
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "E-mail already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("POST /users");

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update the name and/or e-mail of a user.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `404 Not Found` - No user with this ID
/// - `409 Conflict` - The new e-mail belongs to another user
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "E-mail already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path.map_err(ValidationError::from)?;
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("PATCH /users/{}", user_id);

    let user = UserService::new(&state.db)
        .update(user_id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok(Json(user.into_dto()))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path.map_err(ValidationError::from)?;
    tracing::info!("GET /users/{}", user_id);

    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok(Json(user.into_dto()))
}

/// List every user ordered by ID.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /users");

    let users = UserService::new(&state.db).get_all().await?;

    Ok(Json(
        users
            .into_iter()
            .map(|user| user.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Delete a user.
///
/// # Returns
/// - `200 OK` - Empty body, the user was deleted
/// - `404 Not Found` - No user with this ID
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path.map_err(ValidationError::from)?;
    tracing::info!("DELETE /users/{}", user_id);

    UserService::new(&state.db).delete(user_id).await?;

    Ok(StatusCode::OK)
}
