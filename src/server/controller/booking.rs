use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    api::SharerId,
    model::{
        api::ErrorDto,
        booking::{ApproveQuery, BookingDto, BookingListQuery, CreateBookingDto},
        validation::ValidationError,
    },
    server::{
        error::AppError,
        model::booking::{BookingDetails, BookingQuery, CreateBookingParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Validates the state filter and pagination of a booking listing.
fn booking_query(query: &BookingListQuery) -> Result<BookingQuery, ValidationError> {
    Ok(BookingQuery {
        state: query.state()?,
        page: query.page_params().page_request()?,
    })
}

fn into_dtos(bookings: Vec<BookingDetails>) -> Vec<BookingDto> {
    bookings
        .into_iter()
        .map(|booking| booking.into_dto())
        .collect()
}

/// Request a booking of someone else's item.
///
/// The booking starts in `WAITING` status.
///
/// # Returns
/// - `201 Created` - The created booking
/// - `400 Bad Request` - End not after start, or the item is unavailable
/// - `403 Forbidden` - The caller owns the item
/// - `404 Not Found` - Booker or item does not exist
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid dates or unavailable item", body = ErrorDto),
        (status = 403, description = "Caller owns the item", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    SharerId(booker_id): SharerId,
    payload: Result<Json<CreateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;

    tracing::info!("POST /bookings by user {}", booker_id);

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams::from_dto(booker_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Approve or reject a waiting booking of one of the caller's items.
///
/// # Returns
/// - `200 OK` - The booking in its new status
/// - `400 Bad Request` - The booking was already decided
/// - `403 Forbidden` - The caller does not own the item
/// - `404 Not Found` - No booking with this ID
#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("approved" = bool, Query, description = "true to approve, false to reject")
    ),
    responses(
        (status = 200, description = "Booking decided", body = BookingDto),
        (status = 400, description = "Booking already decided", body = ErrorDto),
        (status = 403, description = "Caller is not the item owner", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_booking(
    State(state): State<AppState>,
    SharerId(owner_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<ApproveQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(booking_id) = path.map_err(ValidationError::from)?;
    let Query(query) = query.map_err(ValidationError::from)?;

    tracing::info!(
        "PATCH /bookings/{}?approved={} by user {}",
        booking_id,
        query.approved,
        owner_id
    );

    let booking = BookingService::new(&state.db)
        .approve(booking_id, owner_id, query.approved)
        .await?;

    Ok(Json(booking.into_dto()))
}

#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    responses(
        (status = 200, description = "Booking found", body = BookingDto),
        (status = 403, description = "Caller is neither booker nor owner", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(booking_id) = path.map_err(ValidationError::from)?;
    tracing::info!("GET /bookings/{} by user {}", booking_id, user_id);

    let booking = BookingService::new(&state.db)
        .get_by_id(booking_id, user_id)
        .await?;

    Ok(Json(booking.into_dto()))
}

/// List the caller's bookings, latest start first.
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("state" = Option<String>, Query, description = "ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED"),
        ("from" = Option<i64>, Query, description = "Index of the first element"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Matching bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    query: Result<Query<BookingListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(ValidationError::from)?;
    let query = booking_query(&query)?;

    tracing::info!("GET /bookings?state={:?} by user {}", query.state, user_id);

    let bookings = BookingService::new(&state.db)
        .get_for_booker(user_id, query)
        .await?;

    Ok(Json(into_dtos(bookings)))
}

/// List bookings of the caller's items, latest start first.
#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("state" = Option<String>, Query, description = "ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED"),
        ("from" = Option<i64>, Query, description = "Index of the first element"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Matching bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    SharerId(owner_id): SharerId,
    query: Result<Query<BookingListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(ValidationError::from)?;
    let query = booking_query(&query)?;

    tracing::info!(
        "GET /bookings/owner?state={:?} by user {}",
        query.state,
        owner_id
    );

    let bookings = BookingService::new(&state.db)
        .get_for_owner(owner_id, query)
        .await?;

    Ok(Json(into_dtos(bookings)))
}
