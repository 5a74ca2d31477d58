use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        booking::{
            approve_booking, create_booking, get_booking, get_owner_bookings, get_user_bookings,
        },
        item::{add_comment, create_item, get_item, get_user_items, search_items, update_item},
        request::{create_request, get_other_requests, get_own_requests, get_request},
        user::{create_user, delete_user, get_user, get_users, update_user},
    },
    doc::ApiDoc,
    state::AppState,
};

/// Routes of the REST API, without state.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(get_users))
        .route(
            "/users/{user_id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/items", post(create_item).get(get_user_items))
        .route("/items/search", get(search_items))
        .route("/items/{item_id}", get(get_item).patch(update_item))
        .route("/items/{item_id}/comment", post(add_comment))
        .route("/bookings", post(create_booking).get(get_user_bookings))
        .route("/bookings/owner", get(get_owner_bookings))
        .route(
            "/bookings/{booking_id}",
            get(get_booking).patch(approve_booking),
        )
        .route("/requests", post(create_request).get(get_own_requests))
        .route("/requests/all", get(get_other_requests))
        .route("/requests/{request_id}", get(get_request))
}

/// Full application: API routes, Swagger UI and request tracing, bound to `state`.
pub fn app(state: AppState) -> Router {
    router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
