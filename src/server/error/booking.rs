use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::error_response;

/// Violations of booking and comment rules.
#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// The item is flagged unavailable.
    #[error("The item with id {0} is not available for booking!")]
    UnavailableItem(i32),

    /// The booking already left the WAITING status.
    #[error("The booking request has already been approved!")]
    AlreadyApproved,

    /// Commenting requires a finished, approved booking of the item.
    #[error("The user with id {user_id} has not rented the item with id {item_id}!")]
    ItemWasNotRented { user_id: i32, item_id: i32 },
}

impl BookingError {
    fn reason(&self) -> &'static str {
        match self {
            Self::UnavailableItem(_) => "Item availability",
            Self::AlreadyApproved => "Booking status",
            Self::ItemWasNotRented { .. } => "Comment",
        }
    }
}

/// All booking rule violations are 400 Bad Request.
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let reason = self.reason();
        let error = self.to_string();

        tracing::warn!("{} : {}", reason, error);

        error_response(StatusCode::BAD_REQUEST, reason, error)
    }
}
