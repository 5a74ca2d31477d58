use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::Method,
    response::Response,
    Json,
};

use garde::Validate;

use crate::{
    gateway::{client::ServerClient, error::GatewayError, state::GatewayState},
    model::{
        user::{CreateUserDto, UpdateUserDto},
        validation::ValidationError,
    },
};

pub async fn create_user(
    State(state): State<GatewayState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("Gateway POST /users");

    let client = ServerClient::new(&state);
    client
        .forward(client.request(Method::POST, "/users", None).json(&payload))
        .await
}

pub async fn update_user(
    State(state): State<GatewayState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Path(user_id) = path.map_err(ValidationError::from)?;
    let Json(payload) = payload.map_err(ValidationError::from)?;
    payload.validate()?;

    tracing::info!("Gateway PATCH /users/{}", user_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::PATCH, &format!("/users/{}", user_id), None)
                .json(&payload),
        )
        .await
}

pub async fn get_user(
    State(state): State<GatewayState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, GatewayError> {
    let Path(user_id) = path.map_err(ValidationError::from)?;
    tracing::info!("Gateway GET /users/{}", user_id);

    let client = ServerClient::new(&state);
    client
        .forward(client.request(Method::GET, &format!("/users/{}", user_id), None))
        .await
}

pub async fn get_users(State(state): State<GatewayState>) -> Result<Response, GatewayError> {
    tracing::info!("Gateway GET /users");

    let client = ServerClient::new(&state);
    client
        .forward(client.request(Method::GET, "/users", None))
        .await
}

pub async fn delete_user(
    State(state): State<GatewayState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, GatewayError> {
    let Path(user_id) = path.map_err(ValidationError::from)?;
    tracing::info!("Gateway DELETE /users/{}", user_id);

    let client = ServerClient::new(&state);
    client
        .forward(client.request(Method::DELETE, &format!("/users/{}", user_id), None))
        .await
}
