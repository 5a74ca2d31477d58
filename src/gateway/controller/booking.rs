use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::Method,
    response::Response,
    Json,
};

use crate::{
    api::SharerId,
    gateway::{client::ServerClient, error::GatewayError, state::GatewayState},
    model::{
        booking::{ApproveQuery, BookingListQuery, CreateBookingDto},
        datetime,
        validation::{validate_booking_dates, ValidationError},
    },
};

/// Checks the state name and pagination of a booking listing before forwarding it.
fn validate_listing(query: &BookingListQuery) -> Result<(), ValidationError> {
    query.state()?;
    query.page_params().page_request()?;
    Ok(())
}

/// Bookings must end after they start and must not start in the past.
pub async fn create_booking(
    State(state): State<GatewayState>,
    SharerId(booker_id): SharerId,
    payload: Result<Json<CreateBookingDto>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    validate_booking_dates(payload.start, payload.end)?;
    if payload.start < datetime::now() {
        return Err(ValidationError::StartInPast.into());
    }

    tracing::info!("Gateway POST /bookings by user {}", booker_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::POST, "/bookings", Some(booker_id))
                .json(&payload),
        )
        .await
}

pub async fn approve_booking(
    State(state): State<GatewayState>,
    SharerId(owner_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<ApproveQuery>, QueryRejection>,
) -> Result<Response, GatewayError> {
    let Path(booking_id) = path.map_err(ValidationError::from)?;
    let Query(query) = query.map_err(ValidationError::from)?;

    tracing::info!(
        "Gateway PATCH /bookings/{}?approved={} by user {}",
        booking_id,
        query.approved,
        owner_id
    );

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(
                    Method::PATCH,
                    &format!("/bookings/{}", booking_id),
                    Some(owner_id),
                )
                .query(&query),
        )
        .await
}

pub async fn get_booking(
    State(state): State<GatewayState>,
    SharerId(user_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, GatewayError> {
    let Path(booking_id) = path.map_err(ValidationError::from)?;
    tracing::info!("Gateway GET /bookings/{} by user {}", booking_id, user_id);

    let client = ServerClient::new(&state);
    client
        .forward(client.request(
            Method::GET,
            &format!("/bookings/{}", booking_id),
            Some(user_id),
        ))
        .await
}

pub async fn get_user_bookings(
    State(state): State<GatewayState>,
    SharerId(user_id): SharerId,
    query: Result<Query<BookingListQuery>, QueryRejection>,
) -> Result<Response, GatewayError> {
    let Query(query) = query.map_err(ValidationError::from)?;
    validate_listing(&query)?;

    tracing::info!("Gateway GET /bookings by user {}", user_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::GET, "/bookings", Some(user_id))
                .query(&query),
        )
        .await
}

pub async fn get_owner_bookings(
    State(state): State<GatewayState>,
    SharerId(owner_id): SharerId,
    query: Result<Query<BookingListQuery>, QueryRejection>,
) -> Result<Response, GatewayError> {
    let Query(query) = query.map_err(ValidationError::from)?;
    validate_listing(&query)?;

    tracing::info!("Gateway GET /bookings/owner by user {}", owner_id);

    let client = ServerClient::new(&state);
    client
        .forward(
            client
                .request(Method::GET, "/bookings/owner", Some(owner_id))
                .query(&query),
        )
        .await
}
