use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::error_response;

/// The caller exists but may not act on the resource.
#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("The user with id {user_id} does not have access to this booking!")]
    Booking { user_id: i32, booking_id: i32 },

    #[error("The user with id {user_id} is not the owner of the item with id {item_id}!")]
    NotItemOwner { user_id: i32, item_id: i32 },

    #[error("The user with id {user_id} can't book their own item with id {item_id}!")]
    OwnItem { user_id: i32, item_id: i32 },
}

/// Converts access errors into 403 Forbidden responses.
impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        let error = self.to_string();

        tracing::warn!("Forbidden for this id : {}", error);

        error_response(StatusCode::FORBIDDEN, "Forbidden for this id", error)
    }
}
